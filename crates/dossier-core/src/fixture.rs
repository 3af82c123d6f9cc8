//! The built-in sample profile shown when no record file is given.

use crate::{
  id::ItemId,
  record::{
    Badge, Collaborator, Employee, EventKind, Project, Skill, SkillCategory,
    SocialLinks, TimelineEvent, WorkPreference,
  },
};

fn skill(id: &str, name: &str, level: u8, category: SkillCategory) -> Skill {
  Skill {
    id: ItemId::from(id),
    name: name.into(),
    level,
    category,
  }
}

fn collaborator(id: &str, name: &str, role: &str, avatar: &str) -> Collaborator {
  Collaborator {
    id:         ItemId::from(id),
    name:       name.into(),
    role:       role.into(),
    avatar_url: Some(format!("https://randomuser.me/api/portraits/{avatar}.jpg")),
  }
}

pub fn sample_employee() -> Employee {
  use SkillCategory::{Language, Soft, Technical};

  Employee {
    id:              "emp001".into(),
    first_name:      "Ming".into(),
    last_name:       "Li".into(),
    position:        "Senior Frontend Engineer".into(),
    department:      "Engineering".into(),
    avatar_url:      "https://randomuser.me/api/portraits/men/44.jpg".into(),
    cover_image_url: Some(
      "https://images.unsplash.com/photo-1605379399642-870262d3d051".into(),
    ),
    email:           "ming.li@example.com".into(),
    phone:           Some("+86 138 0000 0000".into()),
    location:        "Shanghai".into(),
    bio:             "Frontend engineer with six years of experience building \
                      modern web applications. Cares about user experience, \
                      accessibility and clean code; mentors junior developers \
                      and contributes to open source."
      .into(),
    join_date:       "2019-04-15".into(),
    skills:          vec![
      skill("skill-react", "React", 90, Technical),
      skill("skill-ts", "TypeScript", 85, Technical),
      skill("skill-css", "CSS/Tailwind", 80, Technical),
      skill("skill-node", "Node.js", 65, Technical),
      skill("skill-graphql", "GraphQL", 75, Technical),
      skill("skill-ux", "UI/UX Design", 70, Technical),
      skill("skill-comm", "Communication", 85, Soft),
      skill("skill-lead", "Team Leadership", 80, Soft),
      skill("skill-solve", "Problem Solving", 90, Soft),
      skill("skill-en", "English", 80, Language),
      skill("skill-zh", "Mandarin", 100, Language),
    ],
    timeline:        vec![
      TimelineEvent {
        id:          ItemId::from("timeline1"),
        title:       "Senior Frontend Engineer".into(),
        description: "Leads the frontend team for the flagship product. \
                      Introduced a design system that lifted developer \
                      productivity by 30%."
          .into(),
        date:        "2019-04-15".into(),
        kind:        EventKind::Work,
        icon:        None,
        highlights:  vec![
          "Led the Angular to React migration".into(),
          "Rolled out a unit-testing strategy".into(),
          "Mentored five junior developers".into(),
        ],
      },
      TimelineEvent {
        id:          ItemId::from("timeline2"),
        title:       "Frontend Engineer".into(),
        description: "Built responsive web applications with React and Redux."
          .into(),
        date:        "2016-03-01".into(),
        kind:        EventKind::Work,
        icon:        None,
        highlights:  vec![
          "Shipped core e-commerce features".into(),
          "Improved site performance by 40%".into(),
          "Introduced an A/B testing framework".into(),
        ],
      },
      TimelineEvent {
        id:          ItemId::from("timeline3"),
        title:       "Advanced React Certification".into(),
        description: "Completed an advanced certification in React patterns."
          .into(),
        date:        "2018-05-20".into(),
        kind:        EventKind::Certification,
        icon:        None,
        highlights:  Vec::new(),
      },
      TimelineEvent {
        id:          ItemId::from("timeline4"),
        title:       "BSc Computer Science".into(),
        description: "Shanghai Jiao Tong University".into(),
        date:        "2012-05-15".into(),
        kind:        EventKind::Education,
        icon:        None,
        highlights:  Vec::new(),
      },
    ],
    projects:        vec![
      Project {
        id:            ItemId::from("proj1"),
        name:          "E-commerce Platform Redesign".into(),
        description:   "Full redesign of the company storefront with React, \
                        TypeScript and GraphQL."
          .into(),
        image_url:     Some(
          "https://images.unsplash.com/photo-1661956602944-249bcd04b63f".into(),
        ),
        technologies:  vec![
          "React".into(),
          "TypeScript".into(),
          "GraphQL".into(),
          "Tailwind CSS".into(),
        ],
        link:          None,
        start_date:    "2020-06-01".into(),
        end_date:      Some("2021-02-15".into()),
        collaborators: vec![
          collaborator("c1", "Wei Zhang", "UX Designer", "men/22"),
          collaborator("c2", "Fang Wang", "Backend Developer", "women/33"),
          collaborator("c3", "Yang Liu", "Product Manager", "men/45"),
        ],
      },
      Project {
        id:            ItemId::from("proj2"),
        name:          "Analytics Dashboard".into(),
        description:   "Real-time analytics dashboard with customisable \
                        widgets and data visualisation."
          .into(),
        image_url:     Some(
          "https://images.unsplash.com/photo-1551288049-bebda4e38f71".into(),
        ),
        technologies:  vec![
          "React".into(),
          "D3.js".into(),
          "Node.js".into(),
          "WebSockets".into(),
        ],
        link:          None,
        start_date:    "2021-04-10".into(),
        end_date:      None,
        collaborators: vec![
          collaborator("c4", "Jing Chen", "Data Scientist", "women/28"),
          collaborator("c5", "Qiang Zhao", "Backend Developer", "men/59"),
        ],
      },
      Project {
        id:            ItemId::from("proj3"),
        name:          "Mobile App Integration".into(),
        description:   "Connected web services to the iOS and Android apps \
                        over REST."
          .into(),
        image_url:     Some(
          "https://images.unsplash.com/photo-1565106430482-8f6e74349ca1".into(),
        ),
        technologies:  vec![
          "React Native".into(),
          "RESTful APIs".into(),
          "OAuth".into(),
        ],
        link:          None,
        start_date:    "2019-08-15".into(),
        end_date:      Some("2020-01-30".into()),
        collaborators: vec![
          collaborator("c6", "Yu Sun", "iOS Developer", "men/36"),
          collaborator("c7", "Xiaohong Lin", "Android Developer", "women/50"),
        ],
      },
    ],
    work_preference: WorkPreference {
      style:         "Mix of team collaboration and focused solo work".into(),
      communication: "Direct and frequent, comfortable async".into(),
      environment:   "Remote, occasionally in the office".into(),
      working_hours: "Flexible, core hours 10:00 to 15:00".into(),
    },
    badges:          vec![
      Badge {
        id:          ItemId::from("badge1"),
        name:        "Innovation Star".into(),
        description: "Awarded for inventive solutions to hard problems".into(),
        image_url:   "https://cdn-icons-png.flaticon.com/512/1378/1378640.png"
          .into(),
        earned_date: "2021-05-10".into(),
      },
      Badge {
        id:          ItemId::from("badge2"),
        name:        "Team Player".into(),
        description: "Recognised for outstanding collaboration and support"
          .into(),
        image_url:   "https://cdn-icons-png.flaticon.com/512/3176/3176272.png"
          .into(),
        earned_date: "2020-12-15".into(),
      },
      Badge {
        id:          ItemId::from("badge3"),
        name:        "Code Quality".into(),
        description: "Consistently ships clean, well-tested, maintainable code"
          .into(),
        image_url:   "https://cdn-icons-png.flaticon.com/512/6295/6295417.png"
          .into(),
        earned_date: "2022-01-20".into(),
      },
    ],
    social_links:    SocialLinks {
      linkedin:  Some("https://linkedin.com/in/mingli".into()),
      github:    Some("https://github.com/mingli".into()),
      twitter:   Some("https://twitter.com/mingli".into()),
      portfolio: Some("https://mingli.dev".into()),
    },
  }
}
