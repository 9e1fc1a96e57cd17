//! Single project entry inside a list view.

use crate::dnd::transfer::{DragTransfer, MEDIA_TYPE_PLAIN_TEXT};
use crate::dnd::Draggable;
use crate::model::project::Project;
use crate::view::{ViewComponent, ViewNode};

/// Renderable, draggable wrapper around one project clone.
#[derive(Debug, Clone)]
pub struct ProjectItemView {
    project: Project,
}

impl ProjectItemView {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Headcount label with singular/plural wording.
    pub fn people_label(&self) -> String {
        if self.project.people == 1 {
            "1 person assigned".to_string()
        } else {
            format!("{} persons assigned", self.project.people)
        }
    }
}

impl Draggable for ProjectItemView {
    fn drag_start(&self, transfer: &mut DragTransfer) {
        transfer.set_data(MEDIA_TYPE_PLAIN_TEXT, &self.project.id.to_string());
    }
}

impl ViewComponent for ProjectItemView {
    fn render(&self) -> ViewNode {
        ViewNode {
            id: self.project.id.to_string(),
            lines: vec![
                self.project.title.clone(),
                self.people_label(),
                self.project.description.clone(),
            ],
        }
    }
}
