use serde::Serialize;
use std::fmt;

/// Payload carried by an adjacency entry.
///
/// Plain edges carry `()`, weighted edges carry a number. Display code reads
/// the weight through [`EdgePayload::weight`], which is `None` for plain
/// edges.
pub trait EdgePayload: Copy + fmt::Debug {
    fn weight(&self) -> Option<f64>;
}

impl EdgePayload for () {
    fn weight(&self) -> Option<f64> {
        None
    }
}

impl EdgePayload for f64 {
    fn weight(&self) -> Option<f64> {
        Some(*self)
    }
}

impl EdgePayload for f32 {
    fn weight(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl EdgePayload for u32 {
    fn weight(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

/// Payloads that always carry a weight.
///
/// Prim's and Dijkstra's algorithms are only available on graphs whose
/// payload implements this trait.
pub trait Weight: EdgePayload {
    fn value(&self) -> f64;
}

impl Weight for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl Weight for f32 {
    fn value(&self) -> f64 {
        f64::from(*self)
    }
}

impl Weight for u32 {
    fn value(&self) -> f64 {
        f64::from(*self)
    }
}

/// A connection from vertex index `u` to vertex index `v`.
///
/// Equality only looks at the endpoints: two edges between the same pair
/// are equal whatever their payload.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(bound(serialize = "W: Serialize + EdgePayload"))]
pub struct Edge<W = ()> {
    pub u: usize,
    pub v: usize,
    #[serde(rename = "weight", skip_serializing_if = "is_unit")]
    pub payload: W,
}

/// An edge whose payload is a floating point weight
pub type WeightedEdge = Edge<f64>;

fn is_unit<W: EdgePayload>(payload: &W) -> bool {
    payload.weight().is_none()
}

impl Edge<()> {
    pub fn new(u: usize, v: usize) -> Self {
        Edge { u, v, payload: () }
    }
}

impl<W: Weight> Edge<W> {
    pub fn weighted(u: usize, v: usize, weight: W) -> Self {
        Edge { u, v, payload: weight }
    }

    pub fn weight(&self) -> f64 {
        self.payload.value()
    }
}

impl<W: Copy> Edge<W> {
    /// The same connection in the opposite direction
    pub fn reversed(&self) -> Self {
        Edge {
            u: self.v,
            v: self.u,
            payload: self.payload,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

impl<W> PartialEq for Edge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.u == other.u && self.v == other.v
    }
}

impl<W> Eq for Edge<W> {}

impl<W: EdgePayload> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload.weight() {
            Some(weight) => write!(f, "({}, {}, {})", self.u, self.v, weight),
            None => write!(f, "({}, {})", self.u, self.v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_weight() {
        let a = Edge::weighted(0, 1, 3.0);
        let b = Edge::weighted(0, 1, 9.5);
        let c = Edge::weighted(1, 0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reversed_keeps_payload() {
        let e = Edge::weighted(2, 4, 1.5);
        let r = e.reversed();
        assert_eq!((r.u, r.v), (4, 2));
        assert_eq!(r.weight(), 1.5);
    }

    #[test]
    fn test_plain_edge_has_no_weight() {
        let e = Edge::new(0, 3);
        assert_eq!(e.payload.weight(), None);
        assert_eq!(e.to_string(), "(0, 3)");
    }

    #[test]
    fn test_weighted_display() {
        assert_eq!(Edge::weighted(1, 2, 4.0).to_string(), "(1, 2, 4)");
        assert_eq!(Edge::weighted(1, 2, 0.5).to_string(), "(1, 2, 0.5)");
    }

    #[test]
    fn test_integer_weights() {
        let e: Edge<u32> = Edge::weighted(0, 1, 7);
        assert_eq!(e.weight(), 7.0);
    }

    #[test]
    fn test_serialize_skips_unit_payload() {
        let plain = serde_json::to_value(Edge::new(0, 1)).unwrap();
        assert_eq!(plain, serde_json::json!({"u": 0, "v": 1}));

        let weighted = serde_json::to_value(Edge::weighted(0, 1, 2.5)).unwrap();
        assert_eq!(weighted, serde_json::json!({"u": 0, "v": 1, "weight": 2.5}));
    }
}
