use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.yml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.path().join("instance_manager.log")
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }
}

/// Two complete accounts
#[allow(dead_code)]
pub const VALID_CONFIG: &str = r#"
accounts:
  - account_name: tokyo-main
    access_key_id: LTAI-a
    access_key_secret: secret-a
    region_id: ap-northeast-1
    image_id: img-1
    plan_id: plan-1
    period: 1
    auto_renew: false
  - account_name: hk-backup
    access_key_id: LTAI-b
    access_key_secret: secret-b
    region_id: cn-hongkong
    image_id: img-2
    plan_id: plan-2
    period: 12
    auto_renew: true
"#;

/// Accounts that fail validation, so no API call is made
#[allow(dead_code)]
pub const INVALID_ACCOUNTS_CONFIG: &str = r#"
accounts:
  - account_name: no-region
    access_key_id: LTAI-a
    access_key_secret: secret-a
    image_id: img-1
    plan_id: plan-1
    period: 1
    auto_renew: false
  - account_name: no-plan
    access_key_id: LTAI-b
    access_key_secret: secret-b
    region_id: cn-hongkong
    image_id: img-2
    period: 1
    auto_renew: true
"#;
