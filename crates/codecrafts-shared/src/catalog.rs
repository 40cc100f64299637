//! Static course catalog.
//!
//! The catalog is reference data compiled into the binary. It is never
//! persisted or mutated; enrollment state refers to it by [`CourseId`].

use serde::Serialize;

use crate::types::CourseId;

/// One course as shown on the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseDescriptor {
    pub id: CourseId,
    pub title: &'static str,
    pub description: &'static str,
    /// Price display string, already formatted with currency.
    pub price: &'static str,
    /// Duration display string.
    pub duration: &'static str,
    /// Icon class reference.
    pub icon: &'static str,
}

const COURSES: [CourseDescriptor; 10] = [
    CourseDescriptor {
        id: CourseId(1),
        title: "Web Development Fundamentals",
        description: "Learn HTML, CSS, and JavaScript from scratch. Build responsive websites and understand web architecture.",
        price: "₹1,299",
        duration: "6 weeks",
        icon: "fas fa-code",
    },
    CourseDescriptor {
        id: CourseId(2),
        title: "Python Programming",
        description: "Master Python programming language. Learn data structures, algorithms, and build real-world applications.",
        price: "₹1,599",
        duration: "8 weeks",
        icon: "fas fa-python",
    },
    CourseDescriptor {
        id: CourseId(3),
        title: "React JS Masterclass",
        description: "Build modern web applications with React. Learn hooks, context API, and state management.",
        price: "₹1,899",
        duration: "10 weeks",
        icon: "fab fa-react",
    },
    CourseDescriptor {
        id: CourseId(4),
        title: "Data Structures & Algorithms",
        description: "Essential computer science concepts for coding interviews and efficient programming.",
        price: "₹1,799",
        duration: "12 weeks",
        icon: "fas fa-project-diagram",
    },
    CourseDescriptor {
        id: CourseId(5),
        title: "Full Stack Development",
        description: "Complete course covering frontend, backend, databases, and deployment.",
        price: "₹2,499",
        duration: "16 weeks",
        icon: "fas fa-layer-group",
    },
    CourseDescriptor {
        id: CourseId(6),
        title: "Mobile App Development",
        description: "Build cross-platform mobile applications using React Native and Flutter.",
        price: "₹1,999",
        duration: "10 weeks",
        icon: "fas fa-mobile-alt",
    },
    CourseDescriptor {
        id: CourseId(7),
        title: "UI/UX Design Principles",
        description: "Learn user interface and user experience design for creating engaging digital products.",
        price: "₹1,499",
        duration: "6 weeks",
        icon: "fas fa-palette",
    },
    CourseDescriptor {
        id: CourseId(8),
        title: "Database Management",
        description: "Master SQL and NoSQL databases. Learn database design, optimization, and administration.",
        price: "₹1,699",
        duration: "8 weeks",
        icon: "fas fa-database",
    },
    CourseDescriptor {
        id: CourseId(9),
        title: "Cloud Computing Basics",
        description: "Introduction to cloud platforms, deployment, and serverless architecture.",
        price: "₹1,899",
        duration: "8 weeks",
        icon: "fas fa-cloud",
    },
    CourseDescriptor {
        id: CourseId(10),
        title: "DevOps Fundamentals",
        description: "Learn continuous integration, deployment, containerization, and infrastructure as code.",
        price: "₹2,199",
        duration: "10 weeks",
        icon: "fas fa-cogs",
    },
];

/// Every course, in display order.
pub fn all() -> &'static [CourseDescriptor] {
    &COURSES
}

/// Linear lookup by id.
pub fn find_by_id(id: CourseId) -> Option<&'static CourseDescriptor> {
    COURSES.iter().find(|c| c.id == id)
}
