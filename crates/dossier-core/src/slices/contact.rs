//! Sidebar contact details and social links.

use strum::{Display, EnumIter};

use crate::{
  draft::{FieldEdit, Slice},
  record::{Employee, EmployeePatch, SocialLinks},
};

use super::non_empty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ContactField {
  Email,
  Phone,
  #[strum(serialize = "LinkedIn")]
  Linkedin,
  #[strum(serialize = "GitHub")]
  Github,
  Twitter,
  Portfolio,
}

/// Optional values are flattened to strings; empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactLinks {
  pub email:     String,
  pub phone:     String,
  pub linkedin:  String,
  pub github:    String,
  pub twitter:   String,
  pub portfolio: String,
}

impl ContactLinks {
  pub fn get(&self, field: ContactField) -> &str {
    match field {
      ContactField::Email => &self.email,
      ContactField::Phone => &self.phone,
      ContactField::Linkedin => &self.linkedin,
      ContactField::Github => &self.github,
      ContactField::Twitter => &self.twitter,
      ContactField::Portfolio => &self.portfolio,
    }
  }
}

impl Slice for ContactLinks {
  type Edit = FieldEdit<ContactField>;
  type Pending = ();

  const NAME: &'static str = "contact";

  fn extract(record: &Employee) -> Self {
    let links = &record.social_links;
    Self {
      email:     record.email.clone(),
      phone:     record.phone.clone().unwrap_or_default(),
      linkedin:  links.linkedin.clone().unwrap_or_default(),
      github:    links.github.clone().unwrap_or_default(),
      twitter:   links.twitter.clone().unwrap_or_default(),
      portfolio: links.portfolio.clone().unwrap_or_default(),
    }
  }

  fn into_patch(self) -> EmployeePatch {
    EmployeePatch {
      email: Some(self.email),
      phone: Some(non_empty(self.phone)),
      social_links: Some(SocialLinks {
        linkedin:  non_empty(self.linkedin),
        github:    non_empty(self.github),
        twitter:   non_empty(self.twitter),
        portfolio: non_empty(self.portfolio),
      }),
      ..EmployeePatch::default()
    }
  }

  fn apply(&mut self, edit: Self::Edit) -> bool {
    let slot = match edit.field {
      ContactField::Email => &mut self.email,
      ContactField::Phone => &mut self.phone,
      ContactField::Linkedin => &mut self.linkedin,
      ContactField::Github => &mut self.github,
      ContactField::Twitter => &mut self.twitter,
      ContactField::Portfolio => &mut self.portfolio,
    };
    *slot = edit.value;
    true
  }
}
