use crate::output;
use catalog_domain::{CardField, FieldKind};
use serde::Serialize;

#[derive(Serialize)]
struct FieldInfo {
    name: &'static str,
    kind: &'static str,
}

pub fn handle() -> anyhow::Result<()> {
    let fields: Vec<FieldInfo> = CardField::ALL
        .iter()
        .map(|field| FieldInfo {
            name: field.as_str(),
            kind: match field.kind() {
                FieldKind::Text => "text",
                FieldKind::Numeric => "number",
                FieldKind::Date => "date",
            },
        })
        .collect();
    output::output_list(fields)
}
