//! Simulated face scan that guesses a skin type and recommends products.

use crate::catalog::{Product, SkinType};
use crate::error::CommerceError;
use crate::ids::entropy;
use crate::search::{query, FilterCriteria, PriceRange, SortKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the simulated scan takes.
pub const SCAN_DURATION: Duration = Duration::from_millis(3000);

/// Number of products recommended after a scan.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Decides which skin type a scan reports.
pub trait SkinTypeDetector {
    fn detect(&mut self) -> SkinType;
}

/// Picks a skin type uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomDetector {
    state: u64,
}

impl RandomDetector {
    pub fn new() -> Self {
        Self::with_seed(entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        // xorshift state must be non-zero
        Self { state: seed | 1 }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl Default for RandomDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinTypeDetector for RandomDetector {
    fn detect(&mut self) -> SkinType {
        let all = SkinType::ALL;
        all[(self.next_u64() % all.len() as u64) as usize]
    }
}

/// Always reports the same skin type.
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(pub SkinType);

impl SkinTypeDetector for FixedDetector {
    fn detect(&mut self) -> SkinType {
        self.0
    }
}

/// Where the scan is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStage {
    Initial,
    Scanning,
    Results,
}

impl ScanStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStage::Initial => "initial",
            ScanStage::Scanning => "scanning",
            ScanStage::Results => "results",
        }
    }

    /// Prompt shown to the user at this stage.
    pub fn prompt(&self) -> &'static str {
        match self {
            ScanStage::Initial => {
                "Let's analyze your skin type to find the perfect face wash for you."
            }
            ScanStage::Scanning => "Position your face within the guide...",
            ScanStage::Results => {
                "Analysis complete! Here are your personalized recommendations."
            }
        }
    }
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub skin_type: SkinType,
    pub description: String,
    pub recommendations: Vec<Product>,
}

/// Most popular products for a skin type, at most `limit` of them.
pub fn recommend(products: &[Product], skin_type: SkinType, limit: usize) -> Vec<&Product> {
    let mut criteria =
        FilterCriteria::with_price_range(PriceRange::spanning(products).unwrap_or_default());
    criteria.skin_types.insert(skin_type);
    query(products, &criteria, SortKey::Popularity)
        .into_iter()
        .take(limit)
        .collect()
}

/// A face scan session.
#[derive(Debug, Clone)]
pub struct FaceScan<D> {
    stage: ScanStage,
    detector: D,
    result: Option<ScanResult>,
}

impl FaceScan<RandomDetector> {
    pub fn random() -> Self {
        Self::new(RandomDetector::new())
    }
}

impl<D: SkinTypeDetector> FaceScan<D> {
    pub fn new(detector: D) -> Self {
        Self {
            stage: ScanStage::Initial,
            detector,
            result: None,
        }
    }

    pub fn stage(&self) -> ScanStage {
        self.stage
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    /// Initial -> Scanning.
    pub fn start(&mut self) -> Result<(), CommerceError> {
        self.transition(ScanStage::Initial, ScanStage::Scanning)
    }

    /// Wait out the scan, detect a skin type, and move to Results.
    pub async fn complete(
        &mut self,
        products: &[Product],
        duration: Duration,
    ) -> Result<&ScanResult, CommerceError> {
        if self.stage != ScanStage::Scanning {
            return Err(self.invalid(ScanStage::Results));
        }

        tokio::time::sleep(duration).await;

        let skin_type = self.detector.detect();
        let recommendations = recommend(products, skin_type, MAX_RECOMMENDATIONS)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        tracing::info!(
            skin_type = skin_type.as_str(),
            recommendations = recommendations.len(),
            "face scan complete"
        );

        self.stage = ScanStage::Results;
        Ok(&*self.result.insert(ScanResult {
            skin_type,
            description: skin_type.description().to_string(),
            recommendations,
        }))
    }

    /// Start and complete in one go.
    pub async fn run(
        &mut self,
        products: &[Product],
        duration: Duration,
    ) -> Result<&ScanResult, CommerceError> {
        self.start()?;
        self.complete(products, duration).await
    }

    /// Back to Initial, discarding any result.
    pub fn reset(&mut self) {
        self.stage = ScanStage::Initial;
        self.result = None;
    }

    fn transition(&mut self, from: ScanStage, to: ScanStage) -> Result<(), CommerceError> {
        if self.stage != from {
            return Err(self.invalid(to));
        }
        tracing::debug!(from = from.as_str(), to = to.as_str(), "face scan stage");
        self.stage = to;
        Ok(())
    }

    fn invalid(&self, to: ScanStage) -> CommerceError {
        CommerceError::InvalidTransition {
            from: self.stage.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::products;
    use crate::ids::ProductId;
    use pretty_assertions::assert_eq;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_recommend_by_popularity() {
        let oily = recommend(products(), SkinType::Oily, 3);
        let ids: Vec<ProductId> = oily.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(4), ProductId(2), ProductId(8)]);
    }

    #[test]
    fn test_recommend_respects_limit() {
        assert_eq!(recommend(products(), SkinType::Normal, 10).len(), 6);
        assert!(recommend(&[], SkinType::Normal, 3).is_empty());
    }

    #[test]
    fn test_random_detector_covers_all_skin_types() {
        let mut detector = RandomDetector::with_seed(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(detector.detect());
        }
        assert_eq!(seen.len(), SkinType::ALL.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_flow() {
        let mut scan = FaceScan::new(FixedDetector(SkinType::Sensitive));
        assert_eq!(scan.stage(), ScanStage::Initial);

        scan.start().unwrap();
        assert_eq!(scan.stage(), ScanStage::Scanning);

        let start = tokio::time::Instant::now();
        let result = scan.complete(products(), SCAN_DURATION).await.unwrap().clone();
        assert!(start.elapsed() >= SCAN_DURATION);
        assert_eq!(result.skin_type, SkinType::Sensitive);
        assert_eq!(ids(&result.recommendations), vec![9, 3, 12]);
        assert_eq!(scan.stage(), ScanStage::Results);
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_requires_scanning() {
        let mut scan = FaceScan::new(FixedDetector(SkinType::Dry));
        let err = scan.complete(products(), SCAN_DURATION).await.unwrap_err();
        assert_eq!(
            err,
            CommerceError::InvalidTransition {
                from: "initial".into(),
                to: "results".into()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_and_reset() {
        let mut scan = FaceScan::new(FixedDetector(SkinType::Dry));
        let result = scan.run(products(), SCAN_DURATION).await.unwrap();
        assert_eq!(ids(&result.recommendations), vec![1, 5, 9]);

        assert!(scan.start().is_err());
        scan.reset();
        assert_eq!(scan.stage(), ScanStage::Initial);
        assert!(scan.result().is_none());
    }
}
