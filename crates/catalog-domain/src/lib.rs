pub mod brief;
pub mod card;
pub mod filter;
pub mod form;
pub mod session;
pub mod sort;
pub mod view;

pub use brief::DatasetBrief;
pub use card::{Card, CardField, FieldKind};
pub use filter::{CardFilter, CompositeFilter, FieldRange, FilterCriteria};
pub use form::FilterForm;
pub use session::{FilterEvent, FilterSession, ViewRenderer};
pub use sort::{SortOrder, SortSpec};
pub use view::CardFilterSort;
