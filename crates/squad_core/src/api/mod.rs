pub mod json_api;

pub use json_api::{
    generate_distribution_json, move_player_json, swap_players_json, toggle_role_json,
    GenerateRequest, GenerateResponse, MutationResponse,
};
