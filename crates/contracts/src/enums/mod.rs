pub mod subscription_status;
