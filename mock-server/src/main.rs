use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let router = match (std::env::var("MOCK_USERNAME"), std::env::var("MOCK_PASSWORD")) {
        (Ok(username), Ok(password)) => mock_server::app_with_credentials(&username, &password),
        _ => mock_server::app(),
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run(listener, router).await
}
