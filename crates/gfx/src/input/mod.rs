mod route;

pub use route::{key_down_from_egui, lock_tab_focus, route_tab_keys, to_input_id};
