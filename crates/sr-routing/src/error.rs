use sr_core::{CoreError, GeoPoint};
use sr_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("start point {0} could not be snapped to any road")]
    StartNotSnapped(GeoPoint),

    #[error("finish point {0} could not be snapped to any road")]
    FinishNotSnapped(GeoPoint),

    #[error("no route from {start} to {finish}")]
    NoRoute { start: GeoPoint, finish: GeoPoint },

    #[error("routing configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
