// the core project data struct
//
// id is the stable slug used in /project/{id} routes; the grid and the
// detail view both resolve records through it
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub long_description: &'static str,
    pub image_label: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub date: &'static str,
    pub duration: &'static str,
    pub team: &'static str,
    pub role: &'static str,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub results: &'static [&'static str],
}

/// All projects, in display order. Re-invocation yields the same sequence.
pub fn projects() -> &'static [ProjectRecord] {
    &PROJECTS
}

/// Resolve a route id against the catalog.
pub fn find_project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.id == id)
}

static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: "ecommerce-platform",
        title: "E-Commerce Platform",
        blurb: "A full-stack e-commerce platform built with React, Node.js, and MongoDB. \
                Features include user authentication, product management, shopping cart, \
                and payment integration.",
        long_description: "This e-commerce platform was built from the ground up to provide \
                a seamless shopping experience. The project involved designing and implementing \
                a complete online store with user authentication, a product catalog, shopping \
                cart functionality, secure payment processing, and an admin dashboard for \
                inventory management. Key challenges included implementing real-time inventory \
                updates, optimizing for mobile devices, and ensuring fast page load times.",
        image_label: "EC",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "JWT"],
        live_url: "https://example.com",
        source_url: "https://github.com",
        date: "2024",
        duration: "3 months",
        team: "Solo Project",
        role: "Full Stack Developer",
        challenges: &[
            "Implementing real-time inventory management",
            "Optimizing for mobile performance",
            "Integrating secure payment processing",
            "Managing complex state across components",
        ],
        solutions: &[
            "Used WebSocket connections for real-time updates",
            "Implemented lazy loading and image optimization",
            "Integrated Stripe with proper error handling",
            "Utilized Redux for centralized state management",
        ],
        results: &[
            "40% improvement in page load times",
            "99.9% uptime achieved",
            "Successfully processed 1000+ transactions",
            "Mobile conversion rate increased by 25%",
        ],
    },
    ProjectRecord {
        id: "task-manager",
        title: "Task Management App",
        blurb: "A collaborative task management application with real-time updates, \
                drag-and-drop functionality, and team collaboration features.",
        long_description: "A kanban-style task manager built for distributed teams. Boards, \
                lists, and cards synchronize across connected clients over websockets, with \
                optimistic updates and conflict resolution on the server. Drag-and-drop \
                ordering, inline editing, activity feeds, and granular notifications keep \
                teams aligned without refreshing the page.",
        image_label: "TM",
        technologies: &["React", "Socket.io", "Express", "PostgreSQL", "Redis"],
        live_url: "https://example.com",
        source_url: "https://github.com",
        date: "2024",
        duration: "2 months",
        team: "Team of 3",
        role: "Frontend Lead",
        challenges: &[
            "Keeping board state consistent across clients",
            "Smooth drag-and-drop on touch devices",
            "Presence tracking without flooding the server",
        ],
        solutions: &[
            "Server-authoritative ordering with optimistic client updates",
            "Pointer-event based drag layer with inertia handling",
            "Debounced presence heartbeats batched through Redis",
        ],
        results: &[
            "Sub-100ms perceived latency on board updates",
            "Adopted by three internal teams within a month",
        ],
    },
    ProjectRecord {
        id: "portfolio-website",
        title: "Portfolio Website",
        blurb: "A modern, responsive portfolio website showcasing projects and skills \
                with smooth animations and interactive elements.",
        long_description: "A single-page portfolio with scroll-triggered section reveals, \
                a project gallery with per-project detail pages, and a persisted dark/light \
                theme. Built with an emphasis on first-paint performance and zero layout \
                shift: all content is compiled in, styles are inlined, and animations are \
                pure CSS driven by a small reveal controller.",
        image_label: "PW",
        technologies: &["React", "Styled Components", "Framer Motion", "Vite"],
        live_url: "https://example.com",
        source_url: "https://github.com",
        date: "2024",
        duration: "3 weeks",
        team: "Solo Project",
        role: "Designer & Developer",
        challenges: &[
            "Avoiding a flash of unrevealed content on load",
            "Keeping the theme consistent across visits",
        ],
        solutions: &[
            "Sections render their hidden presentation as the initial frame",
            "Theme preference persisted to local storage and applied at startup",
        ],
        results: &[
            "Perfect Lighthouse performance score",
            "Under 50KB of shipped styles and markup",
        ],
    },
    ProjectRecord {
        id: "weather-dashboard",
        title: "Weather Dashboard",
        blurb: "A weather application with location-based forecasts, interactive maps, \
                and detailed weather analytics.",
        long_description: "A dashboard aggregating current conditions, hourly and ten-day \
                forecasts, and historical trends for any location. Geolocation picks the \
                initial city; search and favorites make switching quick. Charts render \
                precipitation probability, temperature bands, and wind patterns, and the \
                layout adapts from phone to ultrawide.",
        image_label: "WD",
        technologies: &["React", "OpenWeather API", "Chart.js", "Geolocation"],
        live_url: "https://example.com",
        source_url: "https://github.com",
        date: "2023",
        duration: "1 month",
        team: "Solo Project",
        role: "Frontend Developer",
        challenges: &[
            "Rate-limited upstream API with bursty usage",
            "Rendering dense chart data without jank",
        ],
        solutions: &[
            "Client-side response cache keyed by location and hour",
            "Windowed chart rendering with precomputed series",
        ],
        results: &[
            "API usage cut by 70% through caching",
            "Charts stay at 60fps on mid-range phones",
        ],
    },
    ProjectRecord {
        id: "social-clone",
        title: "Social Media Clone",
        blurb: "A social media platform with features like posts, comments, likes, \
                user profiles, and real-time notifications.",
        long_description: "A feature-complete social feed: post composition with media \
                attachments, nested comments, reactions, follower graphs, and a live \
                notification stream. Firebase handles auth, storage, and the realtime \
                database; security rules enforce per-user access without a custom backend.",
        image_label: "SM",
        technologies: &["React", "Firebase", "Cloud Storage", "Real-time DB"],
        live_url: "https://example.com",
        source_url: "https://github.com",
        date: "2023",
        duration: "2 months",
        team: "Team of 2",
        role: "Full Stack Developer",
        challenges: &[
            "Fanning out notifications to thousands of followers",
            "Moderating uploaded media at the edge",
        ],
        solutions: &[
            "Cloud function fan-out with batched writes",
            "Upload pipeline with automatic content screening",
        ],
        results: &[
            "Notification delivery under two seconds at p95",
            "Zero security-rule violations in audit",
        ],
    },
    ProjectRecord {
        id: "ai-chat",
        title: "AI Chat Application",
        blurb: "An AI-powered chat application with natural language processing, \
                conversation history, and intelligent responses.",
        long_description: "A conversational assistant with streamed responses, persistent \
                conversation history, and tool-augmented answers. The backend proxies the \
                model API, enforces rate limits, and streams tokens to the client over a \
                websocket so responses render as they are generated.",
        image_label: "AI",
        technologies: &["React", "OpenAI API", "Node.js", "WebSocket"],
        live_url: "https://example.com",
        source_url: "https://github.com",
        date: "2023",
        duration: "6 weeks",
        team: "Solo Project",
        role: "Full Stack Developer",
        challenges: &[
            "Streaming long responses without blocking the UI",
            "Keeping conversation context within model limits",
        ],
        solutions: &[
            "Token stream rendered incrementally through a websocket",
            "Sliding-window context with summary compaction",
        ],
        results: &[
            "First token on screen in under a second",
            "Context errors eliminated across 10k conversations",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_stable() {
        let first: Vec<&str> = projects().iter().map(|p| p.id).collect();
        let second: Vec<&str> = projects().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(projects().len(), 6);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = projects().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn lookup_by_id() {
        let hit = find_project("ecommerce-platform").unwrap();
        assert_eq!(hit.title, "E-Commerce Platform");

        assert!(find_project("42").is_none());
        assert!(find_project("").is_none());
    }

    #[test]
    fn detail_fields_are_populated() {
        for project in projects() {
            assert!(!project.challenges.is_empty(), "{} has no challenges", project.id);
            assert!(!project.solutions.is_empty(), "{} has no solutions", project.id);
            assert!(!project.results.is_empty(), "{} has no results", project.id);
            assert!(!project.technologies.is_empty(), "{} has no tags", project.id);
        }
    }
}
