pub mod client;
pub mod constants;
pub mod types;

pub fn get_client(credentials: types::Credentials) -> client::Result<client::BittrexClient> {
    client::BittrexClient::new(credentials)
}
