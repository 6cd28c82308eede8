#[tokio::main]
async fn main() {
    pagebuilder_backend::run().await;
}
