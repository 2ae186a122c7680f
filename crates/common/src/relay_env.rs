pub const DOMAIN_ENDPOINT: &str = "DOMAIN_ENDPOINT";
pub const DOMAIN_ARN: &str = "DOMAIN_ARN";
pub const OUTPUT_TOPIC_ARN: &str = "OUTPUT_TOPIC_ARN";
