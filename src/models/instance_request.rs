use rusoto_signature::Region;

pub const IMAGE_ID: &str = "ami-51709438";
pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 1;
pub const SECURITY_GROUP: &str = "default";
pub const PLACEMENT_HINT: &str = "rs";
pub const AVAILABILITY_ZONE: &str = "";
pub const REGION: Region = Region::UsEast1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// Parameters of the single `RunInstances` call. Every field comes from the
/// constants above; nothing is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRequest {
    pub image_id: String,
    pub min_count: i64,
    pub max_count: i64,
    pub security_groups: Vec<String>,
    pub availability_zone: String,
    /// Opaque token forwarded to the provider untouched.
    pub placement_hint: String,
    pub visibility: Visibility,
}

impl Default for InstanceRequest {
    fn default() -> Self {
        InstanceRequest {
            image_id: IMAGE_ID.to_string(),
            min_count: MIN_COUNT,
            max_count: MAX_COUNT,
            security_groups: vec![SECURITY_GROUP.to_string()],
            availability_zone: AVAILABILITY_ZONE.to_string(),
            placement_hint: PLACEMENT_HINT.to_string(),
            visibility: Visibility::Public,
        }
    }
}
