//! Radio mode resolution

use ptz_hal::RadioMode;

use crate::config::ConnectivityConfig;

/// Resolve the desired configuration to a concrete radio mode
///
/// | espnow | station | ap    | mode           |
/// |--------|---------|-------|----------------|
/// | true   | true    | any   | StationPlusAp  |
/// | true   | false   | any   | ApOnly         |
/// | false  | true    | true  | StationPlusAp  |
/// | false  | true    | false | StationOnly    |
/// | false  | false   | any   | ApOnly         |
///
/// The peer link needs an AP-capable radio, so it forces AP-level
/// activation regardless of the access point flag.
pub fn resolve(config: &ConnectivityConfig) -> RadioMode {
    match (
        config.espnow_enabled,
        config.station_enabled,
        config.ap_enabled,
    ) {
        (true, true, _) => RadioMode::StationPlusAp,
        (true, false, _) => RadioMode::ApOnly,
        (false, true, true) => RadioMode::StationPlusAp,
        (false, true, false) => RadioMode::StationOnly,
        (false, false, _) => RadioMode::ApOnly,
    }
}
