use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Distance function a collection ranks records by. Smaller is closer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DistanceMetric {
    /// Squared Euclidean distance
    #[default]
    L2,
    /// `1 - cosine_similarity`
    Cosine,
    /// `1 - dot_product`
    #[serde(rename = "ip")]
    #[strum(to_string = "ip")]
    InnerProduct,
}

impl DistanceMetric {
    /// Distance between two vectors of equal length.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len());

        match self {
            DistanceMetric::L2 => a
                .iter()
                .zip(b)
                .map(|(x, y)| {
                    let d = x - y;
                    d * d
                })
                .sum(),
            DistanceMetric::InnerProduct => 1.0 - dot(a, b),
            DistanceMetric::Cosine => {
                let denom = dot(a, a).sqrt() * dot(b, b).sqrt();
                // Zero vectors have no direction
                if denom == 0.0 {
                    1.0
                } else {
                    1.0 - dot(a, b) / denom
                }
            }
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
