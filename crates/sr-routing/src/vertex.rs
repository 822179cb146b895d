//! The search vertex space of a single route query.

use std::fmt;

use sr_core::{Edge, Segment};

/// A vertex of the per-query search graph: a real directed segment or one
/// of the two synthetic endpoints.
///
/// Keeping the fake endpoints as their own variants means no real segment
/// can ever be mistaken for one, and every dispatch over a vertex is an
/// exhaustive `match`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vertex {
    StartFake,
    FinishFake,
    Real(Segment),
}

impl Vertex {
    #[inline]
    pub fn as_real(self) -> Option<Segment> {
        match self {
            Vertex::Real(s) => Some(s),
            Vertex::StartFake | Vertex::FinishFake => None,
        }
    }

    #[inline]
    pub fn is_fake(self) -> bool {
        self.as_real().is_none()
    }
}

impl From<Segment> for Vertex {
    #[inline]
    fn from(s: Segment) -> Self {
        Vertex::Real(s)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::StartFake  => f.write_str("start"),
            Vertex::FinishFake => f.write_str("finish"),
            Vertex::Real(s)    => write!(f, "{s}"),
        }
    }
}

/// Adjacency record of the per-query search graph.
pub type VertexEdge = Edge<Vertex>;
