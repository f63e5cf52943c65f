//! Built-in checklist item mappings.
//!
//! Item keys are stored already normalized. Several items may point at the
//! same content key.

use crate::domain::Category::{self, Crew, Equipment, Rig, Rules, Tactics, Weather};

/// A compile-time mapping row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinMapping {
    /// Normalized checklist item key
    pub item: &'static str,
    pub category: Category,
    /// Content key passed to the category provider
    pub key: &'static str,
    pub lesson_id: Option<&'static str>,
}

const fn map(
    item: &'static str,
    category: Category,
    key: &'static str,
    lesson_id: Option<&'static str>,
) -> BuiltinMapping {
    BuiltinMapping {
        item,
        category,
        key,
        lesson_id,
    }
}

pub const BUILTIN_MAPPINGS: &[BuiltinMapping] = &[
    // ── Weather ──────────────────────────────────────────────────────────
    map("check_forecast", Weather, "weather_window", Some("lesson-13-1-1")),
    map("wind_forecast", Weather, "wind_forecast", Some("lesson-13-1-2")),
    map("check_tides", Weather, "tides", Some("lesson-13-2-1")),
    map("tide_times", Weather, "tides", Some("lesson-13-2-1")),
    map("sea_state", Weather, "sea_state", Some("lesson-13-2-3")),
    map("cloud_watch", Weather, "cloud_reading", None),
    map("pressure_trend", Weather, "barometer", Some("lesson-13-3-1")),
    map("fog_plan", Weather, "visibility", None),
    map("gust_assessment", Weather, "gusts", Some("lesson-13-1-4")),
    map("sunset_time", Weather, "daylight", None),
    // ── Tactics ──────────────────────────────────────────────────────────
    map("start_line_bias", Tactics, "line_bias", Some("lesson-7-2-1")),
    map("favored_end", Tactics, "line_bias", Some("lesson-7-2-1")),
    map("start_strategy", Tactics, "starting", Some("lesson-7-2-2")),
    map("first_beat_plan", Tactics, "upwind_strategy", Some("lesson-7-3-1")),
    map("layline_call", Tactics, "laylines", Some("lesson-7-3-2")),
    map("mark_rounding_plan", Tactics, "mark_roundings", Some("lesson-7-4-1")),
    map("downwind_strategy", Tactics, "downwind_strategy", Some("lesson-7-5-1")),
    map("wind_shifts", Tactics, "shifts", Some("lesson-7-3-3")),
    map("current_strategy", Tactics, "current_tactics", None),
    map("covering", Tactics, "covering", None),
    // ── Equipment ────────────────────────────────────────────────────────
    map("life_jackets", Equipment, "pfd", Some("lesson-3-1-1")),
    map("pfd_check", Equipment, "pfd", Some("lesson-3-1-1")),
    map("safety_kit", Equipment, "safety_equipment", Some("lesson-3-1-2")),
    map("knife_onboard", Equipment, "safety_equipment", None),
    map("flares", Equipment, "flares", Some("lesson-3-1-3")),
    map("first_aid_kit", Equipment, "first_aid", Some("lesson-3-2-1")),
    map("vhf_radio", Equipment, "vhf", Some("lesson-3-3-1")),
    map("bilge_pump", Equipment, "bilge", None),
    map("anchor_ready", Equipment, "anchoring", Some("lesson-3-4-1")),
    map("sail_inventory", Equipment, "sail_selection", Some("lesson-3-5-1")),
    map("tow_line", Equipment, "towing", None),
    // ── Rules ────────────────────────────────────────────────────────────
    map("right_of_way", Rules, "port_starboard", Some("lesson-9-1-1")),
    map("port_starboard", Rules, "port_starboard", Some("lesson-9-1-1")),
    map("windward_leeward", Rules, "windward_leeward", Some("lesson-9-1-2")),
    map("overlap_rules", Rules, "mark_room", Some("lesson-9-2-1")),
    map("mark_room", Rules, "mark_room", Some("lesson-9-2-1")),
    map("penalty_turns", Rules, "penalties", Some("lesson-9-3-1")),
    map("protest_procedure", Rules, "protests", Some("lesson-9-3-2")),
    map("sailing_instructions", Rules, "sailing_instructions", None),
    map("course_signals", Rules, "signals", Some("lesson-9-4-1")),
    // ── Crew ─────────────────────────────────────────────────────────────
    map("crew_briefing", Crew, "crew_briefing", Some("lesson-11-1-1")),
    map("assign_roles", Crew, "roles", Some("lesson-11-1-2")),
    map("crew_roles", Crew, "roles", Some("lesson-11-1-2")),
    map("tack_calls", Crew, "communication", Some("lesson-11-2-1")),
    map("gybe_calls", Crew, "communication", Some("lesson-11-2-1")),
    map("mob_drill", Crew, "man_overboard", Some("lesson-11-3-1")),
    map("weight_placement", Crew, "weight_placement", Some("lesson-11-2-3")),
    map("hydration", Crew, "crew_welfare", None),
    map("watch_schedule", Crew, "watch_system", None),
    // ── Rig setting ──────────────────────────────────────────────────────
    map("upper_shrouds", Rig, "shroud_tension", Some("lesson-5-2-1")),
    map("lower_shrouds", Rig, "shroud_tension", Some("lesson-5-2-2")),
    map("mast_rake", Rig, "mast_rake", Some("lesson-5-1-1")),
    map("forestay_tension", Rig, "forestay", Some("lesson-5-1-2")),
    map("backstay_setting", Rig, "backstay", Some("lesson-5-3-1")),
    map("mast_bend", Rig, "mast_bend", Some("lesson-5-3-2")),
    map("pre_bend", Rig, "mast_bend", Some("lesson-5-3-2")),
    map("spreader_check", Rig, "spreaders", None),
    map("rig_tension_gauge", Rig, "tension_gauge", None),
    map("cotter_pins", Rig, "rig_inspection", Some("lesson-5-4-1")),
    map("halyard_check", Rig, "halyards", None),
];
