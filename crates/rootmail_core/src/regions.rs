/// Regions where SES can receive mail.
pub const SES_RECEIVING_REGIONS: [&str; 10] = [
    "us-east-1",
    "eu-west-1",
    "us-west-2",
    "eu-central-1",
    "eu-west-2",
    "us-east-2",
    "ca-central-1",
    "ap-northeast-1",
    "ap-southeast-1",
    "ap-southeast-2",
];

pub fn is_ses_receiving_region(region: &str) -> bool {
    SES_RECEIVING_REGIONS.contains(&region)
}
