mod hardware;
mod io;
mod metadata;
mod specification;
mod ui;

pub use hardware::{Cpu, Gpu, HardwareRequirements, Memory};
pub use io::{Io, IoFormat, IoSide, IoType};
pub use metadata::{Author, Contact, ContainerImage, Doi, HttpUrl, Metadata, ToolName};
pub use specification::Specification;
pub use ui::{Condition, UiItem, UiKey, UiKind, W3Format};
