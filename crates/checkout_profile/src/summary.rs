//! Read-only views of the saved profile (collapsed step preview and summary).

use serde::Serialize;

use crate::state::OrderFormSnapshot;

/// `"{first} {last}"`, only when both parts are non-empty.
pub fn full_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    match (first_name, last_name) {
        (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
            Some(format!("{first} {last}"))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePreview {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Link that switches the order form back to an anonymous shopper.
    pub logout_href: Option<String>,
}

/// `None` when the order form carries no client profile yet.
pub fn preview(order: &OrderFormSnapshot) -> Option<ProfilePreview> {
    let profile = order.client_profile_data.as_ref()?;
    Some(ProfilePreview {
        full_name: full_name(profile.first_name.as_deref(), profile.last_name.as_deref()),
        email: profile.email.clone(),
    })
}

pub fn summary(order: &OrderFormSnapshot, root_path: &str) -> Option<ProfileSummary> {
    let profile = order.client_profile_data.as_ref()?;
    let logout_href = (!order.can_edit_data || order.logged_in)
        .then(|| format!("{root_path}/checkout/changeToAnonymousUser/{}", order.id));
    Some(ProfileSummary {
        full_name: full_name(profile.first_name.as_deref(), profile.last_name.as_deref()),
        email: profile.email.clone(),
        logout_href,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProfileSnapshot;

    fn order(first: Option<&str>, last: Option<&str>) -> OrderFormSnapshot {
        OrderFormSnapshot {
            id: "of-123".into(),
            client_profile_data: Some(ProfileSnapshot {
                first_name: first.map(Into::into),
                last_name: last.map(Into::into),
                email: Some("ana@example.com".into()),
                ..Default::default()
            }),
            can_edit_data: true,
            ..Default::default()
        }
    }

    #[test]
    fn full_name_needs_both_parts() {
        assert_eq!(full_name(Some("Ana"), Some("Souza")).as_deref(), Some("Ana Souza"));
        assert_eq!(full_name(Some("Ana"), None), None);
        assert_eq!(full_name(Some(""), Some("Souza")), None);
    }

    #[test]
    fn no_profile_data_renders_nothing() {
        let order = OrderFormSnapshot::default();
        assert_eq!(preview(&order), None);
        assert_eq!(summary(&order, ""), None);
    }

    #[test]
    fn preview_shows_email_even_without_name() {
        let p = preview(&order(Some("Ana"), None)).unwrap();
        assert_eq!(p.full_name, None);
        assert_eq!(p.email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn logout_only_for_locked_or_logged_in_orders() {
        let editable = order(Some("Ana"), Some("Souza"));
        assert_eq!(summary(&editable, "/br").unwrap().logout_href, None);

        let logged_in = OrderFormSnapshot {
            logged_in: true,
            ..editable.clone()
        };
        assert_eq!(
            summary(&logged_in, "/br").unwrap().logout_href.as_deref(),
            Some("/br/checkout/changeToAnonymousUser/of-123")
        );

        let locked = OrderFormSnapshot {
            can_edit_data: false,
            ..editable
        };
        assert!(summary(&locked, "").unwrap().logout_href.is_some());
    }
}
