//! Static menu catalog bundled with the application.
//!
//! Used when the menu source is `static`; a backend payload replaces it
//! otherwise. Titles are i18n keys.

use crate::domain::{MenuMeta, MenuNode, MenuTree};

const ADMIN: &str = "admin";

pub fn async_routes() -> MenuTree {
    MenuTree::new(vec![
        MenuNode::new(
            13,
            "ImageManager",
            "/image-manage",
            Some("Home"),
            MenuMeta::titled("menus.ImageManager.ImageManage").icon("&#xe6d2;"),
        )
        .with_children(vec![
            MenuNode::new(
                1301,
                "ImageList",
                "imageList",
                Some("ImageList"),
                MenuMeta::titled("menus.ImageManager.ImageList").roles([ADMIN]),
            ),
            MenuNode::new(
                1302,
                "CreateVulEnv",
                "createVulEnv",
                Some("CreateVulEnv"),
                MenuMeta::titled("menus.ImageManager.CreateVulEnv").roles([ADMIN]),
            ),
            MenuNode::new(
                1303,
                "CreateInstance",
                "createInstance",
                Some("CreateInstance"),
                MenuMeta::titled("menus.ImageManager.CreateInstance"),
            ),
            MenuNode::new(
                1304,
                "InstanceManage",
                "instanceManage",
                Some("InstanceManage"),
                MenuMeta::titled("menus.ImageManager.InstanceManage").roles([ADMIN]),
            ),
        ]),
        MenuNode::new(
            2,
            "User",
            "/user",
            Some("Home"),
            MenuMeta::titled("menus.user.title").icon("&#xe86e;"),
        )
        .with_children(vec![
            MenuNode::new(
                301,
                "Account",
                "account",
                Some("Account"),
                MenuMeta::titled("menus.user.account").keep_alive().roles([ADMIN]),
            ),
            MenuNode::new(
                304,
                "UserCenter",
                "user",
                Some("UserCenter"),
                MenuMeta::titled("menus.user.userCenter")
                    .hidden()
                    .keep_alive()
                    .hide_tab(),
            ),
        ]),
        MenuNode::new(
            8,
            "Exception",
            "/exception",
            Some("Home"),
            MenuMeta::titled("menus.exception.title").icon("&#xe820;"),
        )
        .with_children(vec![
            MenuNode::new(
                801,
                "403",
                "403",
                Some("Exception403"),
                MenuMeta::titled("menus.exception.forbidden").keep_alive(),
            ),
            MenuNode::new(
                802,
                "404",
                "404",
                Some("Exception404"),
                MenuMeta::titled("menus.exception.notFound").keep_alive(),
            ),
            MenuNode::new(
                803,
                "500",
                "500",
                Some("Exception500"),
                MenuMeta::titled("menus.exception.serverError").keep_alive(),
            ),
            MenuNode::new(
                804,
                "Incomplete",
                "incomplete",
                Some("Incomplete"),
                MenuMeta::titled("menus.exception.incomplete").keep_alive(),
            ),
        ]),
        MenuNode::new(
            5,
            "Widgets",
            "/widgets",
            Some("Home"),
            MenuMeta::titled("menus.widgets.title").icon("&#xe81a;"),
        )
        .with_children(vec![MenuNode::new(
            515,
            "Fireworks",
            "fireworks",
            Some("Fireworks"),
            MenuMeta::titled("menus.widgets.fireworks").keep_alive().badge("Hot"),
        )]),
        MenuNode::new(
            9,
            "System",
            "/system",
            Some("Home"),
            MenuMeta::titled("menus.system.title").icon("&#xe7b9;"),
        )
        .with_children(vec![MenuNode::new(
            901,
            "Setting",
            "setting",
            Some("Setting"),
            MenuMeta::titled("menus.system.setting").keep_alive(),
        )]),
        MenuNode::new(
            12,
            "Help",
            "/help",
            Some("Home"),
            MenuMeta::titled("menus.help.title").icon("&#xe719;"),
        )
        .with_children(vec![MenuNode::new(
            1101,
            "Document",
            "document",
            Some("Document"),
            MenuMeta::titled("menus.help.document"),
        )]),
    ])
}
