use serde::{Deserialize, Serialize};

/// A paginated edge-list as returned by the storefront API.
///
/// The engine itself only consumes plain sequences; these types exist so
/// callers holding raw query output can hand it over without reshaping it
/// first, and can read the original back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Unwrap the edge wrappers into a plain node sequence.
    pub fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.edges.iter().map(|edge| edge.node.clone()).collect()
    }

    /// Consuming form of [`Connection::flatten`].
    pub fn into_flattened(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

impl<T> From<Vec<T>> for Connection<T> {
    fn from(nodes: Vec<T>) -> Self {
        Self {
            edges: nodes.into_iter().map(|node| Edge { node }).collect(),
        }
    }
}
