use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct ClassifyRequest<'a> {
    pub(crate) inputs: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct LabelScore {
    pub(crate) label: String,
    pub(crate) score: f64,
}

/// Text-classification endpoints answer either one list per input or a flat list.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ClassifyResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassifyResponse {
    pub(crate) fn into_scores(self) -> Vec<LabelScore> {
        match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(scores) => scores,
        }
    }
}
