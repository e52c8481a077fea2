pub mod devops_client;

pub use devops_client::DevOpsClient;
