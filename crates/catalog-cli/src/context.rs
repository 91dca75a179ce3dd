use catalog_core::{AppConfig, CatalogError, CatalogResult};
use catalog_domain::{Card, DatasetBrief};
use serde::Deserialize;
use std::path::Path;

/// Accepted shapes of a card file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardFile {
    Envelope { cards: Vec<Card> },
    Briefs(Vec<DatasetBrief>),
    Cards(Vec<Card>),
}

impl CardFile {
    fn into_cards(self) -> Vec<Card> {
        match self {
            Self::Envelope { cards } | Self::Cards(cards) => cards,
            Self::Briefs(briefs) => briefs.into_iter().map(Card::from).collect(),
        }
    }
}

pub struct CliContext {
    pub cards: Vec<Card>,
    pub config: AppConfig,
}

impl CliContext {
    pub fn load(file_path: &str, config: AppConfig) -> CatalogResult<Self> {
        let path = Path::new(file_path);
        if !path.exists() {
            return Err(CatalogError::NotFound(format!("card file {}", file_path)));
        }

        let content = std::fs::read_to_string(path)?;
        let cards = parse_cards(&content)?;
        tracing::info!("Loaded {} cards from {}", cards.len(), file_path);

        Ok(Self { cards, config })
    }
}

fn parse_cards(content: &str) -> CatalogResult<Vec<Card>> {
    let file: CardFile = serde_json::from_str(content).map_err(|e| {
        CatalogError::Serialization(format!("unrecognized card file: {}", e))
    })?;
    Ok(file.into_cards())
}
