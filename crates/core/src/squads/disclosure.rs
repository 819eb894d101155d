//! Identity disclosure rules for cross-user interest reads.
//!
//! Applied at the store boundary whenever squad interest data leaves the
//! owning account. Client-side filtering is never relied on.

use serde::{Deserialize, Serialize};

use super::squads_model::{Squad, SquadMember};
use crate::constants::HIDDEN_MEMBER_NAME;
use crate::interests::CampInterest;

/// An interest row as seen by other squad members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosedInterest {
    /// Owning account, present only when the member reveals identity.
    pub owner: Option<String>,
    pub member_name: String,
    /// Child attribution, stripped for hidden members.
    pub child_id: Option<String>,
    pub camp_id: String,
    pub week: u32,
    pub looking_for_friends: bool,
}

/// Applies the member's disclosure flags to one interest row.
///
/// Rows from members with `share_schedule = false` must be dropped before
/// this point; this function only decides identity.
pub fn disclose(member: &SquadMember, interest: &CampInterest) -> DisclosedInterest {
    if member.reveal_identity {
        DisclosedInterest {
            owner: Some(interest.owner.clone()),
            member_name: member.display_name.clone(),
            child_id: Some(interest.child_id.clone()),
            camp_id: interest.camp_id.clone(),
            week: interest.week,
            looking_for_friends: interest.looking_for_friends,
        }
    } else {
        DisclosedInterest {
            owner: None,
            member_name: HIDDEN_MEMBER_NAME.to_string(),
            child_id: None,
            camp_id: interest.camp_id.clone(),
            week: interest.week,
            looking_for_friends: interest.looking_for_friends,
        }
    }
}

/// Discloses the squad's interest rows for one caller: sharing members
/// only, the caller's own rows excluded, identity per member flags.
pub fn disclose_squad_interests(
    squad: &Squad,
    interests: &[CampInterest],
    caller: &str,
) -> Vec<DisclosedInterest> {
    let mut rows = Vec::new();
    for member in &squad.members {
        if member.user_id == caller || !member.share_schedule {
            continue;
        }
        for interest in interests.iter().filter(|i| i.owner == member.user_id) {
            rows.push(disclose(member, interest));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squads::squads_model::SquadMember;
    use chrono::NaiveDateTime;

    fn interest(owner: &str, camp: &str, week: u32) -> CampInterest {
        CampInterest {
            owner: owner.to_string(),
            child_id: format!("child-of-{owner}"),
            camp_id: camp.to_string(),
            week,
            looking_for_friends: true,
            created_at: NaiveDateTime::MIN,
            updated_at: NaiveDateTime::MIN,
        }
    }

    fn member(user: &str, reveal: bool, share: bool) -> SquadMember {
        SquadMember {
            user_id: user.to_string(),
            display_name: format!("Name of {user}"),
            reveal_identity: reveal,
            share_schedule: share,
        }
    }

    fn squad(members: Vec<SquadMember>) -> Squad {
        Squad {
            id: "squad-1".to_string(),
            owner: "m1".to_string(),
            name: "Maple Street".to_string(),
            invite_code: "ABCD1234".to_string(),
            members,
            created_at: NaiveDateTime::MIN,
            updated_at: NaiveDateTime::MIN,
        }
    }

    #[test]
    fn hidden_members_are_anonymized() {
        let squad = squad(vec![member("m1", true, true), member("m2", false, true)]);
        let interests = vec![interest("m1", "camp-1", 2), interest("m2", "camp-1", 2)];

        let rows = disclose_squad_interests(&squad, &interests, "caller");
        assert_eq!(rows.len(), 2);

        let m1_row = rows.iter().find(|r| r.owner.is_some()).unwrap();
        assert_eq!(m1_row.owner.as_deref(), Some("m1"));
        assert_eq!(m1_row.member_name, "Name of m1");
        assert_eq!(m1_row.child_id.as_deref(), Some("child-of-m1"));

        let m2_row = rows.iter().find(|r| r.owner.is_none()).unwrap();
        assert_eq!(m2_row.member_name, HIDDEN_MEMBER_NAME);
        assert_eq!(m2_row.child_id, None);
        assert_eq!(m2_row.camp_id, "camp-1");
        assert_eq!(m2_row.week, 2);
    }

    #[test]
    fn no_hidden_row_ever_carries_identity() {
        let squad = squad(vec![member("m1", false, true), member("m2", false, true)]);
        let interests = vec![
            interest("m1", "camp-1", 1),
            interest("m1", "camp-2", 3),
            interest("m2", "camp-1", 1),
        ];

        for row in disclose_squad_interests(&squad, &interests, "caller") {
            assert_eq!(row.owner, None);
            assert_eq!(row.member_name, HIDDEN_MEMBER_NAME);
            assert_eq!(row.child_id, None);
        }
    }

    #[test]
    fn caller_and_non_sharing_members_are_excluded() {
        let squad = squad(vec![
            member("caller", true, true),
            member("m2", true, false),
            member("m3", true, true),
        ]);
        let interests = vec![
            interest("caller", "camp-1", 1),
            interest("m2", "camp-1", 1),
            interest("m3", "camp-1", 1),
        ];

        let rows = disclose_squad_interests(&squad, &interests, "caller");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].owner.as_deref(), Some("m3"));
    }
}
