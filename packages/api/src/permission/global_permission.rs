#![allow(non_upper_case_globals)]

use bitflags::bitflags;

bitflags! {
    /// Global permission bits stored on the user row.
    ///
    /// `Admin` implies every other permission; `check_global_permission`
    /// treats it as a wildcard.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GlobalPermission: i64 {
        const Admin          = 1 << 0;
        const ManageCourses  = 1 << 1;
        const ManageContent  = 1 << 2;
        const ManagePages    = 1 << 3;
        const ManageFinance  = 1 << 4;
        const ManageUsers    = 1 << 5;
        const ManageSettings = 1 << 6;
        const ViewAnalytics  = 1 << 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_bit_roundtrips_through_i64() {
        let bits = (GlobalPermission::ManageCourses | GlobalPermission::ManageFinance).bits();
        let restored = GlobalPermission::from_bits(bits).unwrap();
        assert!(restored.contains(GlobalPermission::ManageCourses));
        assert!(!restored.contains(GlobalPermission::Admin));
    }
}
