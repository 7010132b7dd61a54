use crate::utils::ReferenceFilterConfig;

pub const DEFAULT_REFERENCE_FILTER_CONFIG: &ReferenceFilterConfig = &ReferenceFilterConfig {
    min_references: 10,
    max_references: 70,
};
