#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OwnershipSelector {
    DeclaredOwner,
    ResourceOwner,
    TargetUser,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessRule {
    Allow,
    AllowIfCallerMatches(OwnershipSelector),
    Deny,
}
