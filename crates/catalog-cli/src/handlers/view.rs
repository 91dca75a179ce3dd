use crate::cli::ViewArgs;
use crate::context::CliContext;
use crate::output;
use catalog_core::{AppConfig, Pager};
use catalog_domain::{Card, CardFilterSort, FilterForm, SortSpec};
use serde::Serialize;

#[derive(Serialize)]
struct ViewPage<'a> {
    items: Vec<&'a Card>,
    count: usize,
    page: usize,
    total_pages: usize,
    total_matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortSpec>,
}

pub fn handle(ctx: CliContext, args: ViewArgs) -> anyhow::Result<()> {
    let per_page = args
        .per_page
        .unwrap_or_else(|| ctx.config.effective_per_page());
    let page = args.page;
    let form = build_form(args, &ctx.config);

    let mut view = CardFilterSort::new(ctx.cards);
    view.apply_form(&form);
    if !form.sort_field.trim().is_empty() && view.sort().is_none() {
        tracing::warn!("Unknown sort field '{}', showing unsorted", form.sort_field);
    }

    let visible = view.compute_view();
    let total_matches = visible.len();
    let info = Pager::new(total_matches, per_page).page(page);
    let items: Vec<&Card> = visible[info.range.clone()].to_vec();

    output::output_success(ViewPage {
        count: items.len(),
        items,
        page: info.current_page,
        total_pages: info.total_pages,
        total_matches,
        sort: view.sort(),
    })
}

/// Translate command-line flags into the raw filter form. The config only
/// supplies a sort when `--sort` is absent; `--sort ""` disables it.
fn build_form(args: ViewArgs, config: &AppConfig) -> FilterForm {
    let sort_field = args
        .sort
        .or_else(|| config.default_sort_field.clone())
        .unwrap_or_default();
    let sort_order = args
        .order
        .unwrap_or_else(|| config.effective_sort_order().to_string());

    FilterForm {
        name: args.name.unwrap_or_default(),
        size_from: args.size_from.unwrap_or_default(),
        size_to: args.size_to.unwrap_or_default(),
        row_size_from: args.rows_from.unwrap_or_default(),
        row_size_to: args.rows_to.unwrap_or_default(),
        column_size_from: args.columns_from.unwrap_or_default(),
        column_size_to: args.columns_to.unwrap_or_default(),
        views_from: args.views_from.unwrap_or_default(),
        views_to: args.views_to.unwrap_or_default(),
        downloads_from: args.downloads_from.unwrap_or_default(),
        downloads_to: args.downloads_to.unwrap_or_default(),
        creation_date_from: args.created_from.unwrap_or_default(),
        creation_date_to: args.created_to.unwrap_or_default(),
        modify_date_from: args.modified_from.unwrap_or_default(),
        modify_date_to: args.modified_to.unwrap_or_default(),
        sort_field,
        sort_order,
    }
}
