pub mod participant;
pub mod table;

pub use participant::{
    clamp_weight, default_weight, parse_weight_input, Participant, Tier, LAST_PICK_WEIGHT,
    MAX_WEIGHT, MIN_WEIGHT, ODDS_FOR_FIRST_WEIGHT, REGULAR_WEIGHT,
};
pub use table::Registry;
