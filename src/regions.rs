/// Region registry for the clinic operations analytics service.
///
/// Defines the canonical list of service regions monitored by the
/// dashboard. This is the single source of truth for region codes — all
/// other modules should reference regions from here rather than hardcoding
/// codes, and every pipeline stage iterates regions in registry order so
/// generated data, aggregates, forecasts, and alerts stay aligned.

// ---------------------------------------------------------------------------
// Region metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitored service region.
pub struct Region {
    /// Short lowercase code used as the region key throughout the pipeline.
    pub code: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Role of the region in the operations picture.
    pub description: &'static str,
    /// Approximate catchment population served by the region's clinics.
    pub catchment_population: u32,
}

/// All monitored service regions, ordered by reporting priority
/// (central hub first, then the outlying districts clockwise from north).
pub static REGION_REGISTRY: &[Region] = &[
    Region {
        code: "central",
        name: "Central District",
        description: "Main hospital campus and walk-in clinic. Highest \
                      patient volume; drives the city-wide totals.",
        catchment_population: 182_000,
    },
    Region {
        code: "north",
        name: "North District",
        description: "Satellite clinic cluster serving the northern \
                      suburbs. Vaccination drives are staged from here.",
        catchment_population: 96_000,
    },
    Region {
        code: "east",
        name: "East District",
        description: "Industrial corridor clinics. Screening throughput \
                      runs high during workplace testing campaigns.",
        catchment_population: 74_000,
    },
    Region {
        code: "south",
        name: "South District",
        description: "Community health outposts with mobile units. \
                      Reporting can lag the fixed sites by a day.",
        catchment_population: 68_000,
    },
    Region {
        code: "west",
        name: "West District",
        description: "Rural referral catchment. Lowest volume but the \
                      largest share of hypertension follow-ups.",
        catchment_population: 41_000,
    },
];

/// Returns the codes for all monitored regions as a `Vec<&str>`, in
/// registry order, suitable for iterating the pipeline stages.
pub fn all_region_codes() -> Vec<&'static str> {
    REGION_REGISTRY.iter().map(|r| r.code).collect()
}

/// Looks up a region by code. Returns `None` if not found.
///
/// Callers that require the region to exist should treat `None` as a
/// programming error and fail fast; region codes originate from this
/// registry, so a miss means a stage invented a key.
pub fn find_region(code: &str) -> Option<&'static Region> {
    REGION_REGISTRY.iter().find(|r| r.code == code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
