pub mod radius_map;
