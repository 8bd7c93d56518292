use crate::layout::OutputLayout;
use xylopipe::core::models::record::QueryRequest;
use xylopipe::engine::config::RetrievalConfig;

/// One named search and the files its results go to.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonPlan {
    pub name: String,
    pub request: QueryRequest,
}

#[derive(Debug)]
pub struct AppConfig {
    pub retrieval: RetrievalConfig,
    pub taxa: Vec<TaxonPlan>,
    pub layout: OutputLayout,
}
