//! Tag-name classification
//!
//! A fixed enumeration of known HTML tag names with the two behavioural
//! sets the builder dispatches on: void tags (never carry children or an
//! explicit closer) and skip tags (raw-content regions that must not be
//! rescanned as markup). Classification is case-insensitive; the stored
//! node name keeps its original casing, so identity and category stay
//! separate concerns.

use strum_macros::{Display, EnumString};

/// Classification of a tag name against the known HTML tag set.
///
/// Lookup is ASCII case-insensitive (`"DIV"`, `"Div"` and `"div"` all map
/// to [`TagKind::Div`]); names outside the set map to [`TagKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TagKind {
    A,
    Abbr,
    Address,
    Area,
    Article,
    Aside,
    Audio,
    B,
    Base,
    Bdi,
    Bdo,
    Blockquote,
    Body,
    Br,
    Button,
    Canvas,
    Caption,
    Cite,
    Code,
    Col,
    Colgroup,
    Command,
    Data,
    Datalist,
    Dd,
    Del,
    Details,
    Dfn,
    Dialog,
    Div,
    Dl,
    Dt,
    Em,
    Embed,
    Fieldset,
    Figcaption,
    Figure,
    Footer,
    Form,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Header,
    Hgroup,
    Hr,
    Html,
    I,
    Iframe,
    Img,
    Input,
    Ins,
    Kbd,
    Keygen,
    Label,
    Legend,
    Li,
    Link,
    Main,
    Map,
    Mark,
    Menu,
    Meta,
    Meter,
    Nav,
    Noscript,
    Object,
    Ol,
    Optgroup,
    Option,
    Output,
    P,
    Param,
    Picture,
    Pre,
    Progress,
    Q,
    Rp,
    Rt,
    Ruby,
    S,
    Samp,
    Script,
    Section,
    Select,
    Slot,
    Small,
    Source,
    Span,
    Strong,
    Style,
    Sub,
    Summary,
    Sup,
    Table,
    Tbody,
    Td,
    Template,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Time,
    Title,
    Tr,
    Track,
    U,
    Ul,
    Var,
    Video,
    Wbr,
    Unknown,
}

impl TagKind {
    /// Classify a raw tag name; anything unrecognized is `Unknown`
    #[inline]
    pub fn classify(name: &str) -> Self {
        name.parse().unwrap_or(TagKind::Unknown)
    }

    /// Void tags never have children or an explicit closing tag; they are
    /// always treated as self-closing
    pub fn is_void(self) -> bool {
        matches!(
            self,
            TagKind::Area
                | TagKind::Base
                | TagKind::Br
                | TagKind::Col
                | TagKind::Command
                | TagKind::Embed
                | TagKind::Hr
                | TagKind::Img
                | TagKind::Input
                | TagKind::Keygen
                | TagKind::Link
                | TagKind::Meta
                | TagKind::Param
                | TagKind::Source
                | TagKind::Track
                | TagKind::Wbr
        )
    }

    /// Skip tags (script/style) carry raw text; valid `<` characters in
    /// their bodies would otherwise derail the scan
    #[inline]
    pub fn is_skip(self) -> bool {
        matches!(self, TagKind::Script | TagKind::Style)
    }
}
