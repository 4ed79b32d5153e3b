//! Entity mapper
//!
//! Pure transforms from raw upstream records to output rows. A missing
//! upstream field becomes `""` (or `0`), never an absent column.

use crate::api::{MeResponse, RawComponent, RawDevResource, RawProject, RawProjectFile, RawStyle, RawUser};
use crate::schema::{
    BranchInfo, ComponentFrame, ComponentRow, ComponentSetFrame, ComponentSetRow, ConnectionInfo,
    DevResourceRow, ProjectFileRow, ProjectRow, StyleRow, UserRef,
};

/// Base of every link into the Figma web app
pub const FIGMA_WEB_URL: &str = "https://www.figma.com";

/// Editor reported when a project file does not name one
pub const DEFAULT_EDITOR_TYPE: &str = "design";

/// Fallback connection name
pub const DEFAULT_CONNECTION_NAME: &str = "Figma User";

/// Shape of a node deep link
///
/// Sync table rows and card/dev-resource results have always used slightly
/// different forms, and existing links must keep resolving the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `https://www.figma.com/file/{key}/?node-id={id}`
    SyncRow,
    /// `https://www.figma.com/file/{key}?node-id={id}`
    Direct,
}

/// Deep link to a node inside a file
pub fn node_link(file_key: &str, node_id: &str, style: LinkStyle) -> String {
    let separator = match style {
        LinkStyle::SyncRow => "/?",
        LinkStyle::Direct => "?",
    };
    format!(
        "{FIGMA_WEB_URL}/file/{file_key}{separator}node-id={}",
        encode_component(node_id)
    )
}

/// Link to a file
pub fn file_link(file_key: &str) -> String {
    format!("{FIGMA_WEB_URL}/file/{file_key}")
}

/// Link to a project
pub fn project_link(project_id: &str) -> String {
    format!("{FIGMA_WEB_URL}/files/project/{project_id}")
}

/// Percent-encode a URI component, leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as is
pub fn encode_component(value: &str) -> String {
    const KEPT: [(&str, &str); 5] = [
        ("%21", "!"),
        ("%27", "'"),
        ("%28", "("),
        ("%29", ")"),
        ("%2A", "*"),
    ];

    let mut encoded = urlencoding::encode(value).into_owned();
    for (escape, raw) in KEPT {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, raw);
        }
    }
    encoded
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// ============================================================================
// Published entities
// ============================================================================

/// Creator reference
pub fn user(raw: Option<&RawUser>) -> UserRef {
    let Some(raw) = raw else {
        return UserRef::default();
    };
    UserRef {
        id: or_empty(&raw.id),
        handle: or_empty(&raw.handle),
        img_url: or_empty(&raw.img_url),
    }
}

/// Component row, without dev resources
pub fn component(raw: &RawComponent, style: LinkStyle) -> ComponentRow {
    let file_key = or_empty(&raw.file_key);
    let node_id = or_empty(&raw.node_id);
    let frame = raw.containing_frame.as_ref();

    ComponentRow {
        key: or_empty(&raw.key),
        link: node_link(&file_key, &node_id, style),
        file_key,
        node_id,
        thumbnail_url: or_empty(&raw.thumbnail_url),
        name: or_empty(&raw.name),
        description: or_empty(&raw.description),
        created_at: or_empty(&raw.created_at),
        updated_at: or_empty(&raw.updated_at),
        user: user(raw.user.as_ref()),
        containing_frame: ComponentFrame {
            page_id: frame.map(|f| or_empty(&f.page_id)).unwrap_or_default(),
            page_name: frame.map(|f| or_empty(&f.page_name)).unwrap_or_default(),
        },
        dev_resources: None,
    }
}

/// Component set row, without dev resources
pub fn component_set(raw: &RawComponent, style: LinkStyle) -> ComponentSetRow {
    let file_key = or_empty(&raw.file_key);
    let node_id = or_empty(&raw.node_id);
    let containing_frame = raw
        .containing_frame
        .as_ref()
        .map(|f| ComponentSetFrame {
            name: or_empty(&f.name),
            node_id: or_empty(&f.node_id),
            page_id: or_empty(&f.page_id),
            page_name: or_empty(&f.page_name),
            background_color: or_empty(&f.background_color),
        })
        .unwrap_or_default();

    ComponentSetRow {
        key: or_empty(&raw.key),
        link: node_link(&file_key, &node_id, style),
        file_key,
        node_id,
        thumbnail_url: or_empty(&raw.thumbnail_url),
        name: or_empty(&raw.name),
        description: or_empty(&raw.description),
        created_at: or_empty(&raw.created_at),
        updated_at: or_empty(&raw.updated_at),
        user: user(raw.user.as_ref()),
        containing_frame,
        dev_resources: None,
    }
}

/// Style row
pub fn style(raw: &RawStyle, style: LinkStyle) -> StyleRow {
    let file_key = or_empty(&raw.file_key);
    let node_id = or_empty(&raw.node_id);

    StyleRow {
        key: or_empty(&raw.key),
        link: node_link(&file_key, &node_id, style),
        file_key,
        node_id,
        style_type: or_empty(&raw.style_type),
        thumbnail_url: or_empty(&raw.thumbnail_url),
        name: or_empty(&raw.name),
        description: or_empty(&raw.description),
        created_at: or_empty(&raw.created_at),
        updated_at: or_empty(&raw.updated_at),
        sort_position: or_empty(&raw.sort_position),
        user: user(raw.user.as_ref()),
    }
}

// ============================================================================
// Projects
// ============================================================================

/// Project row
pub fn project(raw: &RawProject, team_id: &str) -> ProjectRow {
    let id = or_empty(&raw.id);
    ProjectRow {
        link: project_link(&id),
        id,
        name: or_empty(&raw.name),
        team_id: team_id.to_string(),
        file_count: 0,
        created_at: or_empty(&raw.created_at),
        modified_at: or_empty(&raw.modified_at),
    }
}

/// Project file row
///
/// `project_name` is the name reported for the whole listing, used when the
/// file itself does not carry one.
pub fn project_file(raw: &RawProjectFile, project_id: &str, project_name: Option<&str>) -> ProjectFileRow {
    let key = or_empty(&raw.key);
    ProjectFileRow {
        name: or_empty(&raw.name),
        thumbnail_url: or_empty(&raw.thumbnail_url),
        last_modified: or_empty(&raw.last_modified),
        editor_type: raw
            .editor_type
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR_TYPE.to_string()),
        project_id: project_id.to_string(),
        project_name: raw
            .project_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(project_name)
            .unwrap_or_default()
            .to_string(),
        branches: BranchInfo {
            count: raw.branches.as_ref().map_or(0, |b| b.len() as u64),
            main_file_key: key.clone(),
        },
        link: file_link(&key),
        key,
    }
}

// ============================================================================
// Dev resources
// ============================================================================

/// Dev resource row, without references
///
/// The API reports no timestamps, so both are set to `now`.
pub fn dev_resource(raw: &RawDevResource, now: &str) -> DevResourceRow {
    let file_key = or_empty(&raw.file_key);
    let node_id = or_empty(&raw.node_id);

    DevResourceRow {
        id: or_empty(&raw.id),
        name: or_empty(&raw.name),
        url: or_empty(&raw.url),
        link: node_link(&file_key, &node_id, LinkStyle::Direct),
        file_key,
        node_id,
        created_at: now.to_string(),
        updated_at: now.to_string(),
        component: None,
        component_set: None,
    }
}

// ============================================================================
// Account
// ============================================================================

/// `TestConnection` result
pub fn connection_info(me: &MeResponse) -> ConnectionInfo {
    ConnectionInfo {
        user_id: or_empty(&me.id),
        handle: or_empty(&me.handle),
        email: or_empty(&me.email),
        img_url: or_empty(&me.img_url),
    }
}

/// Display name of the connected account
pub fn connection_name(me: &MeResponse) -> String {
    [&me.handle, &me.email]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONNECTION_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RawFrame;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn raw_component() -> RawComponent {
        serde_json::from_value(json!({
            "key": "K1",
            "file_key": "F1",
            "node_id": "1:2",
            "thumbnail_url": "https://cdn/t.png",
            "name": "Button",
            "description": "Primary button",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z",
            "user": {"id": 99, "handle": "ada", "img_url": "https://cdn/a.png"},
            "containing_frame": {"pageId": "0:1", "pageName": "Page 1", "name": "Frame"}
        }))
        .unwrap()
    }

    #[test]
    fn test_node_link_styles() {
        assert_eq!(
            node_link("F1", "1:2", LinkStyle::SyncRow),
            "https://www.figma.com/file/F1/?node-id=1%3A2"
        );
        assert_eq!(
            node_link("F1", "1:2", LinkStyle::Direct),
            "https://www.figma.com/file/F1?node-id=1%3A2"
        );
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("1:2"), "1%3A2");
        assert_eq!(encode_component("I1:2;3:4"), "I1%3A2%3B3%3A4");
        assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_component("(x)!*'~"), "(x)!*'~");
    }

    #[test]
    fn test_component_keeps_every_field() {
        let row = component(&raw_component(), LinkStyle::SyncRow);

        assert_eq!(
            row,
            ComponentRow {
                key: "K1".to_string(),
                file_key: "F1".to_string(),
                node_id: "1:2".to_string(),
                thumbnail_url: "https://cdn/t.png".to_string(),
                name: "Button".to_string(),
                description: "Primary button".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                updated_at: "2024-02-01T00:00:00Z".to_string(),
                user: UserRef {
                    id: "99".to_string(),
                    handle: "ada".to_string(),
                    img_url: "https://cdn/a.png".to_string(),
                },
                containing_frame: ComponentFrame {
                    page_id: "0:1".to_string(),
                    page_name: "Page 1".to_string(),
                },
                link: "https://www.figma.com/file/F1/?node-id=1%3A2".to_string(),
                dev_resources: None,
            }
        );
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let raw: RawStyle = serde_json::from_value(json!({
            "key": "S1",
            "file_key": "F1",
            "node_id": "3:4",
            "description": null
        }))
        .unwrap();

        let row = style(&raw, LinkStyle::SyncRow);
        assert_eq!(row.description, "");
        assert_eq!(row.sort_position, "");
        assert_eq!(row.user, UserRef::default());
        assert_eq!(row.link, "https://www.figma.com/file/F1/?node-id=3%3A4");
    }

    #[test]
    fn test_component_set_frame() {
        let mut raw = raw_component();
        raw.containing_frame = Some(RawFrame {
            name: Some("Buttons".to_string()),
            node_id: Some("5:6".to_string()),
            page_id: None,
            page_name: Some("Library".to_string()),
            background_color: Some("#FFFFFF".to_string()),
        });

        let row = component_set(&raw, LinkStyle::Direct);
        assert_eq!(
            row.containing_frame,
            ComponentSetFrame {
                name: "Buttons".to_string(),
                node_id: "5:6".to_string(),
                page_id: String::new(),
                page_name: "Library".to_string(),
                background_color: "#FFFFFF".to_string(),
            }
        );
        assert_eq!(row.link, "https://www.figma.com/file/F1?node-id=1%3A2");
    }

    #[test]
    fn test_project_numeric_id() {
        let raw: RawProject =
            serde_json::from_value(json!({"id": 123, "name": "Web"})).unwrap();
        let row = project(&raw, "42");

        assert_eq!(row.id, "123");
        assert_eq!(row.team_id, "42");
        assert_eq!(row.file_count, 0);
        assert_eq!(row.created_at, "");
        assert_eq!(row.link, "https://www.figma.com/files/project/123");
    }

    #[test]
    fn test_project_file_defaults() {
        let raw: RawProjectFile = serde_json::from_value(json!({
            "key": "FK",
            "name": "Marketing site",
            "branches": [{"key": "B1"}, {"key": "B2"}]
        }))
        .unwrap();

        let row = project_file(&raw, "7", Some("Web"));
        assert_eq!(row.editor_type, "design");
        assert_eq!(row.project_id, "7");
        assert_eq!(row.project_name, "Web");
        assert_eq!(
            row.branches,
            BranchInfo {
                count: 2,
                main_file_key: "FK".to_string()
            }
        );
        assert_eq!(row.link, "https://www.figma.com/file/FK");

        let row = project_file(&RawProjectFile::default(), "7", None);
        assert_eq!(row.project_name, "");
        assert_eq!(row.branches.count, 0);
    }

    #[test]
    fn test_dev_resource_timestamps_and_link() {
        let raw: RawDevResource = serde_json::from_value(json!({
            "id": "DR1",
            "name": "Ticket",
            "url": "https://tracker/1",
            "file_key": "F1",
            "node_id": "1:2"
        }))
        .unwrap();

        let row = dev_resource(&raw, "2024-05-01T00:00:00Z");
        assert_eq!(row.created_at, "2024-05-01T00:00:00Z");
        assert_eq!(row.updated_at, "2024-05-01T00:00:00Z");
        assert_eq!(row.link, "https://www.figma.com/file/F1?node-id=1%3A2");
        assert!(row.component.is_none());
    }

    #[test]
    fn test_connection_name_fallbacks() {
        let mut me = MeResponse {
            handle: Some("ada".to_string()),
            email: Some("ada@example.com".to_string()),
            ..MeResponse::default()
        };
        assert_eq!(connection_name(&me), "ada");

        me.handle = Some(String::new());
        assert_eq!(connection_name(&me), "ada@example.com");

        me.email = None;
        assert_eq!(connection_name(&me), "Figma User");
    }
}
