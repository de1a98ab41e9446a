/// `QueryParams` usage example
use search_sync::QueryParams;

fn main() {
    // Parse a query string
    let mut params = QueryParams::parse("name=John&age=30&tag=a&tag=b");

    // Get values
    println!("name: {:?}", params.get("name")); // Some("John")
    println!("tags: {:?}", params.get_all("tag")); // ["a", "b"]
    println!();

    // Set keeps the position of existing keys
    params.set("age", 31_u8);
    params.set("city", "Tokyo");
    println!("After set: {params}"); // name=John&age=31&tag=a&tag=b&city=Tokyo
    println!();

    // Omit keys
    let rest = params.without(["tag", "age"]);
    println!("Without tag/age: {rest}"); // name=John&city=Tokyo
    println!();

    // Reserved characters are percent-encoded
    params.set("q", "fish & chips");
    println!("Encoded: {}", params.to_query_string());
}
