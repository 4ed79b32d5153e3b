//! Declared schemas of every formula result

use super::types::{ObjectSchema, PropertySchema, ValueHint};

fn text(description: &str) -> PropertySchema {
    PropertySchema::string().describe(description)
}

fn hinted(hint: ValueHint, description: &str) -> PropertySchema {
    PropertySchema::string().hint(hint).describe(description)
}

fn user(description: &str) -> PropertySchema {
    PropertySchema::object(
        ObjectSchema::new()
            .property("id", text("The user's Figma ID"))
            .property("handle", text("The user's Figma handle/username"))
            .property(
                "img_url",
                hinted(ValueHint::ImageReference, "The user's profile image URL"),
            ),
    )
    .describe(description)
}

fn dev_resource_refs(description: &str) -> PropertySchema {
    let reference = ObjectSchema::new()
        .property("id", PropertySchema::string().required())
        .property("name", PropertySchema::string().required())
        .id("id")
        .display("name")
        .identity("DevResource");
    PropertySchema::array(PropertySchema::object(reference)).describe(description)
}

fn entity_ref(identity: &str, description: &str) -> PropertySchema {
    let reference = ObjectSchema::new()
        .property("key", PropertySchema::string().required())
        .property("name", PropertySchema::string().required())
        .id("key")
        .display("name")
        .identity(identity);
    PropertySchema::object(reference)
        .describe(description)
        .optional()
}

/// Common columns of published components, component sets and styles
fn published(noun: &str) -> ObjectSchema {
    ObjectSchema::new()
        .property("key", text(&format!("The unique key for the {noun}")))
        .property(
            "file_key",
            text(&format!("The key associated with the file containing the {noun}")),
        )
        .property(
            "node_id",
            text(&format!(
                "The unique identifier for the node associated with the {noun}"
            )),
        )
        .property(
            "thumbnail_url",
            hinted(
                ValueHint::ImageReference,
                &format!("The URL for the {noun}'s thumbnail image"),
            ),
        )
        .property("name", text(&format!("The name of the {noun}")))
        .property(
            "description",
            text(&format!("A brief description of the {noun}")),
        )
        .property(
            "created_at",
            hinted(
                ValueHint::DateTime,
                &format!("The date and time when the {noun} was created"),
            ),
        )
        .property(
            "updated_at",
            hinted(
                ValueHint::DateTime,
                &format!("The date and time when the {noun} was last updated"),
            ),
        )
        .property(
            "user",
            user(&format!("Information about the user who created the {noun}")),
        )
        .property(
            "link",
            hinted(ValueHint::Url, &format!("Direct link to the {noun} in Figma")),
        )
        .id("key")
        .display("name")
        .title("name")
}

/// Component rows
pub fn components() -> ObjectSchema {
    let frame = ObjectSchema::new()
        .property("pageId", text("The ID of the page containing the frame"))
        .property("pageName", text("The name of the page containing the frame"));

    published("component")
        .property(
            "containing_frame",
            PropertySchema::object(frame)
                .describe("Details about the frame containing the component"),
        )
        .property(
            "dev_resources",
            dev_resource_refs("Dev resources linked to this component"),
        )
        .featured(&["name", "description", "thumbnail_url", "updated_at", "user"])
}

/// Component set rows
pub fn component_sets() -> ObjectSchema {
    let frame = ObjectSchema::new()
        .property("name", text("The name of the frame containing the component set"))
        .property("nodeId", text("The node ID of the frame containing the component set"))
        .property("pageId", text("The ID of the page containing the frame"))
        .property("pageName", text("The name of the page containing the frame"))
        .property("backgroundColor", text("The background color of the frame"));

    published("component set")
        .property(
            "containing_frame",
            PropertySchema::object(frame)
                .describe("Details about the frame containing the component set"),
        )
        .property(
            "dev_resources",
            dev_resource_refs("Dev resources linked to this component set"),
        )
        .featured(&["name", "description", "thumbnail_url", "user", "created_at"])
}

/// Style rows
pub fn styles() -> ObjectSchema {
    published("style")
        .property(
            "style_type",
            text("The type of the style (FILL, TEXT, EFFECT, GRID)"),
        )
        .property(
            "sort_position",
            text("The position of the style in a sorted list"),
        )
        .featured(&[
            "name",
            "description",
            "style_type",
            "thumbnail_url",
            "user",
            "created_at",
        ])
}

/// Project rows
pub fn projects() -> ObjectSchema {
    ObjectSchema::new()
        .property("id", text("The unique ID of the project"))
        .property("name", text("The name of the project"))
        .property("teamId", text("The ID of the team this project belongs to"))
        .property(
            "fileCount",
            PropertySchema::number().describe("Number of files in the project (estimated)"),
        )
        .property(
            "created_at",
            hinted(ValueHint::DateTime, "When the project was created"),
        )
        .property(
            "modified_at",
            hinted(ValueHint::DateTime, "When the project was last modified"),
        )
        .property(
            "link",
            hinted(ValueHint::Url, "Direct link to the project in Figma"),
        )
        .id("id")
        .display("name")
        .title("name")
        .featured(&["name", "fileCount", "modified_at"])
}

/// Project file rows
pub fn project_files() -> ObjectSchema {
    let branches = ObjectSchema::new()
        .property(
            "count",
            PropertySchema::number().describe("Number of branches"),
        )
        .property("main_file_key", text("Key of the main file"));

    ObjectSchema::new()
        .property("key", text("The unique file key"))
        .property("name", text("The name of the file"))
        .property(
            "thumbnail_url",
            hinted(ValueHint::ImageReference, "Thumbnail image of the file"),
        )
        .property(
            "last_modified",
            hinted(ValueHint::DateTime, "When the file was last modified"),
        )
        .property("editor_type", text("The type of editor (design, figjam, etc.)"))
        .property("projectId", text("The ID of the parent project"))
        .property("projectName", text("The name of the parent project"))
        .property(
            "branches",
            PropertySchema::object(branches).describe("Branch metadata if available"),
        )
        .property(
            "link",
            hinted(ValueHint::Url, "Direct link to the file in Figma"),
        )
        .id("key")
        .display("name")
        .title("name")
        .featured(&["name", "thumbnail_url", "last_modified", "projectName"])
}

/// Dev resource rows
pub fn dev_resources() -> ObjectSchema {
    ObjectSchema::new()
        .property("id", text("Unique identifier of the dev resource"))
        .property("name", text("The name of the dev resource"))
        .property(
            "url",
            hinted(ValueHint::Url, "The URL of the dev resource"),
        )
        .property("file_key", text("The file key where the dev resource belongs"))
        .property("node_id", text("The target node to attach the dev resource to"))
        .property(
            "created_at",
            hinted(ValueHint::DateTime, "When the dev resource was created"),
        )
        .property(
            "updated_at",
            hinted(ValueHint::DateTime, "When the dev resource was last updated"),
        )
        .property(
            "link",
            hinted(ValueHint::Url, "Direct link to the node in Figma"),
        )
        .property(
            "component",
            entity_ref(
                "FileComponent",
                "Reference to the component this dev resource is attached to",
            ),
        )
        .property(
            "component_set",
            entity_ref(
                "FileComponentSet",
                "Reference to the component set this dev resource is attached to",
            ),
        )
        .id("id")
        .display("name")
        .featured(&["name", "url", "node_id", "updated_at"])
}

/// `TestConnection` result
pub fn connection() -> ObjectSchema {
    ObjectSchema::new()
        .property("userId", text("The user's Figma ID"))
        .property("handle", text("The user's Figma handle/username"))
        .property("email", text("The user's email address"))
        .property(
            "img_url",
            hinted(ValueHint::ImageReference, "The user's profile image URL"),
        )
        .display("handle")
        .title("handle")
        .subtitles(&["email"])
        .image("img_url")
}

/// `TestTeamAccess` result
pub fn team_access() -> ObjectSchema {
    ObjectSchema::new()
        .property("teamId", text("The team ID extracted from the URL"))
        .property(
            "componentCount",
            PropertySchema::number().describe("Number of components found in the team"),
        )
        .property("status", text("Connection status message"))
        .display("status")
        .title("status")
}

fn bulk(counter: &str, verb: &str) -> ObjectSchema {
    ObjectSchema::new()
        .property(
            counter,
            PropertySchema::number()
                .describe(format!("Number of resources successfully {counter}")),
        )
        .property(
            "errors",
            PropertySchema::number()
                .describe(format!("Number of resources that failed to {verb}")),
        )
        .property("details", text("Details about the operation"))
        .display("details")
}

/// `BulkCreateDevResources` result
pub fn bulk_create() -> ObjectSchema {
    bulk("created", "create")
}

/// `BulkUpdateDevResources` result
pub fn bulk_update() -> ObjectSchema {
    bulk("updated", "update")
}
