//! Artifact collection for synthesis runs.
//!
//! A [`Collector`] holds the named artifacts (`input`, `recited`, `rendered`)
//! produced by exactly one run and is reset before the next one starts.

#[allow(clippy::module_inception)]
mod collector;

pub use collector::{ArtifactValue, Collector, artifact};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::PhoneticToken;
    use serde_json::json;

    // ===========================================
    // record / reset / snapshot
    // ===========================================

    #[test]
    fn test_new_collector_is_empty() {
        let collector = Collector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
        assert!(collector.snapshot().is_empty());
    }

    #[test]
    fn test_record_stores_each_artifact() {
        let mut collector = Collector::new();

        collector.record(artifact::INPUT, json!({"text": "HI"}));
        collector.record(
            artifact::RECITED,
            vec![PhoneticToken::symbol("HH"), PhoneticToken::symbol("AY")],
        );
        collector.record(artifact::RENDERED, vec![0u8, 128, 255]);

        assert_eq!(collector.len(), 3);
        assert_eq!(
            collector.get(artifact::RENDERED),
            Some(&ArtifactValue::Samples(vec![0, 128, 255]))
        );
    }

    #[test]
    fn test_record_same_name_overwrites() {
        let mut collector = Collector::new();

        collector.record(artifact::RENDERED, vec![1u8]);
        collector.record(artifact::RENDERED, vec![2u8, 3]);

        assert_eq!(collector.len(), 1);
        assert_eq!(
            collector.get(artifact::RENDERED),
            Some(&ArtifactValue::Samples(vec![2, 3]))
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut collector = Collector::new();
        collector.record(artifact::RECITED, vec![PhoneticToken::Code(4)]);
        collector.record(artifact::RENDERED, vec![128u8]);

        collector.reset();

        assert!(collector.is_empty());
        assert!(collector.get(artifact::RECITED).is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut collector = Collector::new();
        collector.reset();
        collector.reset();
        assert!(collector.is_empty());
    }

    #[test]
    fn test_record_after_snapshot_is_allowed() {
        let mut collector = Collector::new();
        collector.record(artifact::RECITED, vec![PhoneticToken::Code(1)]);
        let before = collector.snapshot().len();

        collector.record(artifact::RENDERED, vec![9u8]);

        assert_eq!(before, 1);
        assert_eq!(collector.len(), 2);
    }

    // ===========================================
    // Serialization
    // ===========================================

    #[test]
    fn test_serializes_as_flat_object() {
        let mut collector = Collector::new();
        collector.record(artifact::INPUT, json!({"text": "A", "pitch": 64}));
        collector.record(
            artifact::RECITED,
            vec![PhoneticToken::symbol("AA"), PhoneticToken::Code(7)],
        );
        collector.record(artifact::RENDERED, vec![128u8, 255]);

        let value = serde_json::to_value(&collector).unwrap();

        assert_eq!(
            value,
            json!({
                "input": {"text": "A", "pitch": 64},
                "recited": ["AA", 7],
                "rendered": [128, 255]
            })
        );
    }

    #[test]
    fn test_empty_collector_serializes_as_empty_object() {
        let collector = Collector::new();
        assert_eq!(serde_json::to_string(&collector).unwrap(), "{}");
    }
}
