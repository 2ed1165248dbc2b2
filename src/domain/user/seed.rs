//! User Context - Seed Data

use super::{User, UserName, UserRole};

const SEED: &[(i64, &str, &str)] = &[
    (1, "Alice", "DevOps Engineer"),
    (2, "Bob", "Developer"),
    (3, "Charlie", "SRE"),
];

/// 进程启动时的三个种子用户
pub fn seed_users() -> Vec<User> {
    SEED.iter()
        .map(|&(id, name, role)| {
            User::seed(
                id,
                UserName::new(name).expect("seed user names are non-empty"),
                UserRole::new(role).expect("seed user roles are non-empty"),
            )
        })
        .collect()
}
