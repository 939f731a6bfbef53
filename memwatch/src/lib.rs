pub mod config;
pub mod error;
pub mod logging;
pub mod meminfo;
pub mod poll;
pub mod render;

#[cfg(test)]
mod tests {
    use super::render::Scale;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn human_divisor_always_matches_unit(total in 0u64..4_000_000_000) {
            let scale = Scale::select(total, true);
            let expected: u64 = match scale.unit {
                "kB" => 1,
                "MB" => 1_000,
                "GB" => 1_000_000,
                "TB" => 1_000_000_000,
                other => panic!("unexpected unit {other}"),
            };
            prop_assert_eq!(scale.divisor, expected);
        }

        #[test]
        fn human_divisor_is_monotonic(total in 0u64..4_000_000_000) {
            let here = Scale::select(total, true).divisor;
            let next = Scale::select(total + 1, true).divisor;
            prop_assert!(next >= here);
        }

        #[test]
        fn non_human_scale_is_identity(total in any::<u64>()) {
            prop_assert_eq!(Scale::select(total, false), Scale { divisor: 1, unit: "kB" });
        }
    }
}
