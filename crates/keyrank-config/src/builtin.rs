//! Curated override mappings shipped with keyrank.

/// Built-in curated tiers, as `(target, [(candidate, tier)])`.
///
/// These seed the override table when `settings.builtin_overrides` is on. A target
/// defined in any config file replaces its built-in mapping entirely.
pub const BUILTIN_OVERRIDES: &[(&str, &[(&str, u8)])] = &[
    (
        "차박텐트",
        &[
            ("차박텐트", 5),
            ("차박 도킹 텐트", 5),
            ("레이 차박텐트", 4),
            ("꼬리 텐트", 4),
            ("캠핑장소", 3),
            ("인천 캠핑장", 3),
            ("마시안해변 차박", 3),
        ],
    ),
    (
        "데오드란트",
        &[
            ("데오드란트", 5),
            ("액취제거제", 5),
            ("땀냄새제거제", 5),
            ("겨드랑이스프레이", 5),
            ("바디스프레이", 4),
            ("퍼스피런트", 4),
            ("겨드랑이케어", 4),
            ("체취관리", 4),
            ("바디미스트", 4),
            ("여름데이트", 3),
            ("운동 전후", 3),
            ("일상루틴", 3),
            ("데이트준비", 3),
            ("마스크습기", 3),
            ("겨울러닝복장", 3),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_targets_are_normalized_and_unique() {
        let mut seen = HashSet::new();
        for (target, _) in BUILTIN_OVERRIDES {
            assert_eq!(*target, target.trim().to_lowercase());
            assert!(seen.insert(*target), "duplicate target {target}");
        }
    }

    #[test]
    fn builtin_tiers_are_reportable() {
        for (target, mapping) in BUILTIN_OVERRIDES {
            assert!(!mapping.is_empty(), "{target} has no entries");
            for (candidate, tier) in *mapping {
                assert!(
                    [3, 4, 5].contains(tier),
                    "{target}/{candidate} has tier {tier}"
                );
            }
        }
    }

    #[test]
    fn builtin_targets_map_to_themselves() {
        for (target, mapping) in BUILTIN_OVERRIDES {
            assert!(mapping.contains(&(*target, 5)));
        }
    }
}
