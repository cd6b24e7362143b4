
/// Path of the vendor listing page
pub const VENDORS_PATH: &str = "/vendors";

/// Example searches offered under the search bar
pub static POPULAR_SEARCHES: [&str; 3] = [
    "Photographers Mumbai",
    "Banquet Halls Delhi",
    "Mehendi Artists",
];
