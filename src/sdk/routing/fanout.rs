use futures::future::join_all;

use super::route::Coordinate;
use super::service::DirectionsProvider;

/// One leg of the ride: a consecutive coordinate pair and its position in
/// the original waypoint sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub origin: Coordinate,
    pub destination: Coordinate,
}

fn segments_of(coords: &[Coordinate]) -> Vec<Segment> {
    coords
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Segment {
            index,
            origin: pair[0],
            destination: pair[1],
        })
        .collect()
}

/// Resolves driving geometry for every consecutive coordinate pair.
///
/// All N-1 segments are requested concurrently and joined with a single
/// wait-for-all barrier; each completion is written into the slot for its
/// original pair index, so output order never depends on completion order.
/// A failed segment becomes `None` in its slot and does not disturb its
/// siblings.
pub async fn segment_geometries(
    provider: &dyn DirectionsProvider,
    coords: &[Coordinate],
) -> Vec<Option<Vec<Coordinate>>> {
    if coords.len() <= 1 {
        return Vec::new();
    }

    let segments = segments_of(coords);
    let requests = segments.iter().map(|segment| async move {
        match provider
            .drive_geometry(segment.origin, segment.destination)
            .await
        {
            Ok(geometry) => (segment.index, Some(geometry)),
            Err(e) => {
                log::warn!(
                    "[FANOUT] Segment {} ({:?} -> {:?}) unavailable: {}",
                    segment.index,
                    segment.origin,
                    segment.destination,
                    e
                );
                (segment.index, None)
            }
        }
    });

    // Slots are pre-assigned and disjoint, so no synchronisation is needed.
    let mut slots: Vec<Option<Vec<Coordinate>>> = vec![None; segments.len()];
    for (index, geometry) in join_all(requests).await {
        slots[index] = geometry;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::error::ProviderError;
    use async_trait::async_trait;
    use std::time::Duration;

    // Earlier segments answer later than later ones, to prove that slot
    // order follows pair order and not completion order.
    struct StaggeredDirections;

    #[async_trait]
    impl DirectionsProvider for StaggeredDirections {
        async fn drive_geometry(
            &self,
            start: Coordinate,
            end: Coordinate,
        ) -> Result<Vec<Coordinate>, ProviderError> {
            let delay = if start.latitude < 1.0 { 50 } else { 5 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![start, end])
        }
    }

    struct FailsFrom {
        origin: Coordinate,
    }

    #[async_trait]
    impl DirectionsProvider for FailsFrom {
        async fn drive_geometry(
            &self,
            start: Coordinate,
            end: Coordinate,
        ) -> Result<Vec<Coordinate>, ProviderError> {
            if start == self.origin {
                Err(ProviderError::NoRoute)
            } else {
                Ok(vec![start, end])
            }
        }
    }

    fn coords() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(3.0, 3.0),
        ]
    }

    #[tokio::test]
    async fn preserves_pair_order_regardless_of_completion_order() {
        let slots = segment_geometries(&StaggeredDirections, &coords()).await;

        assert_eq!(slots.len(), 3);
        for (i, slot) in slots.iter().enumerate() {
            let geometry = slot.as_ref().unwrap();
            assert_eq!(geometry[0], Coordinate::new(i as f64, i as f64));
            assert_eq!(
                geometry[1],
                Coordinate::new((i + 1) as f64, (i + 1) as f64)
            );
        }
    }

    #[tokio::test]
    async fn failed_segment_degrades_without_disturbing_siblings() {
        let provider = FailsFrom {
            origin: Coordinate::new(1.0, 1.0),
        };
        let slots = segment_geometries(&provider, &coords()).await;

        assert_eq!(slots.len(), 3);
        assert!(slots[0].is_some());
        assert!(slots[1].is_none());
        assert!(slots[2].is_some());
    }

    #[tokio::test]
    async fn single_coordinate_yields_no_segments() {
        let slots = segment_geometries(&StaggeredDirections, &[Coordinate::new(0.0, 0.0)]).await;
        assert!(slots.is_empty());
    }

    #[tokio::test]
    async fn empty_input_yields_no_segments() {
        let slots = segment_geometries(&StaggeredDirections, &[]).await;
        assert!(slots.is_empty());
    }
}
