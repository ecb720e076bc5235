pub mod mock_dns_client;
