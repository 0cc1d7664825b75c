pub async fn root() -> &'static str {
    "500px photo search gateway. Try /search?term=sunset"
}

pub async fn health() -> &'static str {
    "OK"
}
