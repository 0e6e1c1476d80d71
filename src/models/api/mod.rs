pub mod params;

pub use params::{
    AnalyzeMetrics, AnalyzeResponse, MetaAnalysisResponse, ParamsRunLighthouse, ParamsUrl,
};
