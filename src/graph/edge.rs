use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::error::GraphError;

/// Edge lists are small for the graph sizes the game is played on; K8 has 28 edges.
pub type EdgeList = SmallVec<[Edge; 32]>;

/// An unordered pair of distinct nodes. The endpoints are stored normalized so that
/// `low < high`, which makes the derived ordering the ascending `(i, j)` order used
/// for move enumeration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Edge {
    pub(super) low: usize,
    pub(super) high: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Result<Self, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop { node: a });
        }

        Ok(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    #[inline]
    pub fn low(&self) -> usize {
        self.low
    }

    #[inline]
    pub fn high(&self) -> usize {
        self.high
    }

    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.low, self.high)
    }

    pub fn touches(&self, node: usize) -> bool {
        self.low == node || self.high == node
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for Edge {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || GraphError::InvalidEdgeFormat {
            input: input.to_string(),
        };

        let (a, b) = input.trim().split_once('-').ok_or_else(invalid)?;
        let a = a.trim().parse::<usize>().map_err(|_| invalid())?;
        let b = b.trim().parse::<usize>().map_err(|_| invalid())?;

        Edge::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_endpoints() {
        let edge = Edge::new(4, 1).unwrap();
        assert_eq!(edge.endpoints(), (1, 4));
        assert_eq!(edge, Edge::new(1, 4).unwrap());
    }

    #[test]
    fn test_new_rejects_self_loop() {
        assert_eq!(Edge::new(3, 3), Err(GraphError::SelfLoop { node: 3 }));
    }

    #[test]
    fn test_ordering_is_ascending_low_then_high() {
        let mut edges = vec![
            Edge::new(1, 2).unwrap(),
            Edge::new(0, 3).unwrap(),
            Edge::new(0, 1).unwrap(),
        ];
        edges.sort();
        let rendered: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["0-1", "0-3", "1-2"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("2-5".parse::<Edge>().unwrap(), Edge::new(2, 5).unwrap());
        assert_eq!(" 5 - 2 ".parse::<Edge>().unwrap(), Edge::new(2, 5).unwrap());
        assert!(matches!(
            "25".parse::<Edge>(),
            Err(GraphError::InvalidEdgeFormat { .. })
        ));
        assert!(matches!(
            "a-b".parse::<Edge>(),
            Err(GraphError::InvalidEdgeFormat { .. })
        ));
        assert_eq!("1-1".parse::<Edge>(), Err(GraphError::SelfLoop { node: 1 }));
    }

    #[test]
    fn test_touches() {
        let edge = Edge::new(0, 2).unwrap();
        assert!(edge.touches(0));
        assert!(edge.touches(2));
        assert!(!edge.touches(1));
    }
}
