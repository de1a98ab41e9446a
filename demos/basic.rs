use search_sync::{Config, MemoryEnvironment, QueryStringManager};

fn main() {
    // An in-memory stand-in for the browser's location and history
    let env = MemoryEnvironment::new("/products?category=books");

    // Default config: every write replaces the current history entry
    let manager = QueryStringManager::new(&env);

    let url = manager.set_params([("page", "2"), ("sort", "price")], None);
    println!("After set: {url}"); // /products?category=books&page=2&sort=price

    let url = manager.omit_params(["page"], None);
    println!("After omit: {url}"); // /products?category=books&sort=price

    // reset: false pushes a new entry instead
    let pushing = QueryStringManager::with_config(&env, Config::new().reset(false));
    pushing.set_params([("category", "games")], None);

    println!("History:");
    for entry in env.entries() {
        println!("  {entry}");
    }
    println!("Writes: {}", env.write_count()); // 3
}
