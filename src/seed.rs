// The full course content loaded by the one-shot population pass. Terms are
// static forests per category: sibling order comes from slice position and
// hierarchy depth from nesting, so the stored level cannot drift from the
// actual parent chain.

use crate::db::Database;
use crate::error::Result;

/// The seven standard study questions applied to every term, in display order.
pub const STANDARD_QUESTIONS: [&str; 7] = [
    "What does it mean?",
    "Why is it important?",
    "When and/or where is it used?",
    "What are some examples?",
    "If it's part of a process, how does it fit into the process and how does it relate to other parts of the process?",
    "What does it look like to do this well?",
    "How is it similar to or different than related terms?",
];

const CATEGORIES: [(&str, &str); 7] = [
    ("General", "Foundational HCI and UX concepts"),
    ("UX in Software Engineering", "Integration of UX practices in software development"),
    ("Overall UX Process", "The UX lifecycle and iterative process"),
    ("Analysis", "Methods for understanding users, work, and requirements"),
    ("Design", "Design thinking, conceptual design, and design production"),
    ("Prototyping", "Creating and testing early versions of designs"),
    ("Evaluation", "Methods for assessing and validating UX designs"),
];

struct SeedTerm {
    name: &'static str,
    definition: &'static str,
    // (question order 1..=7, answer text); not every term answers every question
    answers: &'static [(i64, &'static str)],
    children: &'static [SeedTerm],
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSummary {
    pub categories: usize,
    pub questions: usize,
    pub terms: usize,
    pub answers: usize,
}

/// One-shot population pass. Any integrity error aborts the run.
pub fn populate(db: &Database) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    let mut question_ids = Vec::with_capacity(STANDARD_QUESTIONS.len());
    for (i, text) in STANDARD_QUESTIONS.iter().enumerate() {
        question_ids.push(db.insert_question(i as i64 + 1, text)?);
        summary.questions += 1;
    }

    let sections: [&[SeedTerm]; 7] = [
        GENERAL_TERMS,
        UX_IN_SE_TERMS,
        UX_PROCESS_TERMS,
        ANALYSIS_TERMS,
        DESIGN_TERMS,
        PROTOTYPING_TERMS,
        EVALUATION_TERMS,
    ];

    for (i, ((name, description), terms)) in CATEGORIES.iter().zip(sections).enumerate() {
        let category_id = db.insert_category(i as i64 + 1, name, description)?;
        summary.categories += 1;
        insert_forest(db, category_id, None, terms, &question_ids, &mut summary)?;
    }

    Ok(summary)
}

fn insert_forest(
    db: &Database,
    category_id: i64,
    parent: Option<i64>,
    terms: &[SeedTerm],
    question_ids: &[i64],
    summary: &mut SeedSummary,
) -> Result<()> {
    for (i, term) in terms.iter().enumerate() {
        let term_id = db.insert_term(category_id, parent, term.name, term.definition, i as i64 + 1)?;
        summary.terms += 1;
        for (order, text) in term.answers {
            db.insert_answer(term_id, question_ids[(*order - 1) as usize], text)?;
            summary.answers += 1;
        }
        insert_forest(db, category_id, Some(term_id), term.children, question_ids, summary)?;
    }
    Ok(())
}

// Category 1: General

static GENERAL_TERMS: &[SeedTerm] = &[
    SeedTerm {
        name: "Human-Computer Interaction (HCI)",
        definition: "An interdisciplinary field focused on the design, evaluation, and implementation of interactive computing systems for human use and the study of major phenomena surrounding them.",
        answers: &[
            (1, "HCI is the study and practice of designing, evaluating, and implementing interactive computing systems for human use. It encompasses understanding how people interact with technology and improving those interactions."),
            (2, "HCI is important because it ensures technology is usable, useful, and provides positive experiences. It bridges the gap between human capabilities/needs and technical possibilities, making technology accessible and effective."),
            (3, "HCI is used throughout the entire software/product development lifecycle, from initial research and requirements gathering to design, implementation, and evaluation. It's applied in academia, industry, and any context where humans interact with computers."),
            (4, "Examples include: designing smartphone interfaces, creating accessible websites, developing voice assistants, improving medical device interfaces, and optimizing dashboard displays for cars."),
            (5, "HCI is the overarching field that encompasses UX, UI design, usability engineering, and interaction design. It provides the theoretical foundation and research methods that inform all these practices."),
            (6, "Good HCI practice involves user-centered design, empirical evaluation, iterative refinement, consideration of diverse user needs, and applying established principles from psychology, design, and computer science."),
            (7, "HCI is broader than UX (which focuses on overall experience) and UI (which focuses on interface elements). HCI includes research, theory, and empirical studies, while UX and UI are more practice-oriented. HCI is the academic/research field; UX/UI are professional practices."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "User Experience (UX)",
        definition: "The overall experience a person has when interacting with a product, system, or service, encompassing all aspects of the end-user's interaction including usability, usefulness, and emotional impact.",
        answers: &[
            (1, "UX encompasses everything users experience when interacting with a product or service - from first impression to long-term satisfaction. It includes functional, emotional, and aesthetic dimensions of the interaction."),
            (2, "UX is critical because it determines whether users will adopt, continue using, and recommend a product. Good UX leads to user satisfaction, productivity, and business success; poor UX results in frustration, abandonment, and failure."),
            (3, "UX is considered throughout the entire product lifecycle - from initial concept through design, development, launch, and ongoing improvements. It's practiced in software companies, design agencies, product teams, and any organization creating interactive products."),
            (4, "Examples include: the seamless experience of using an iPhone, the frustration of a confusing checkout process, the delight of a well-designed game, the efficiency of a professional tool like Adobe Photoshop."),
            (5, "UX is a holistic concept that results from successfully combining usability, usefulness, and emotional impact. It's informed by HCI research and implemented through UI design, interaction design, and usability engineering practices."),
            (6, "Excellent UX is invisible - users accomplish their goals effortlessly without thinking about the interface. It involves deep understanding of user needs, thoughtful design decisions, attention to detail, and continuous iteration based on user feedback."),
            (7, "UX is broader than UI (which is just the visual/interactive elements), more holistic than usability (which focuses on effectiveness/efficiency), and the practical outcome of HCI research. UX includes emotional and value aspects beyond pure functionality."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "User Interface (UI)",
        definition: "The visual and interactive elements through which users interact with a system, including screens, pages, buttons, icons, and other visual and interactive components.",
        answers: &[
            (1, "UI refers to the specific visual and interactive elements users see and manipulate when using a system - the buttons, menus, forms, icons, typography, colors, and layout that constitute the interface."),
            (2, "UI is important because it's the primary means through which users interact with functionality. A well-designed UI makes systems intuitive and efficient; a poorly designed UI creates confusion and errors even if underlying functionality is strong."),
            (3, "UI design occurs during the detailed design phase, after conceptual design is complete. It's implemented in all interactive systems - websites, mobile apps, desktop software, kiosks, smart devices, and embedded systems."),
            (4, "Examples include: the Windows taskbar and Start menu, iOS home screen and app icons, a website's navigation menu, the controls in a car dashboard, ATM screens and buttons."),
            (5, "UI is the tangible manifestation of design decisions. It comes after UX research and conceptual design, implementing the interaction design through specific visual and interactive elements. UI is what users actually see and touch."),
            (6, "Good UI design is consistent, visually clear, follows established conventions while innovating where appropriate, provides clear affordances, gives immediate feedback, and is aesthetically pleasing without sacrificing usability."),
            (7, "UI is a subset of UX (the visual/interactive layer vs. the overall experience). UI is more concrete than interaction design (which is conceptual). UI focuses on how things look and respond; UX focuses on how things feel and satisfy needs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Design",
        definition: "The intentional creative process of planning and making decisions about the form, function, and experience of a product or system to solve problems and meet user needs.",
        answers: &[
            (1, "Design is the creative, intentional process of envisioning and specifying how something should work and appear to solve problems and meet user needs. It involves making informed decisions about form, function, and experience."),
            (2, "Design is crucial because it bridges user needs and technical capabilities. Good design makes products usable, useful, and delightful; it can differentiate products in the market and determine success or failure."),
            (3, "Design occurs throughout the UX lifecycle, from early conceptual design through detailed design and refinement. It's practiced by UX designers, interaction designers, visual designers, and product designers across industries."),
            (4, "Examples include: sketching wireframes for a new app, creating a storyboard for a user flow, designing the interaction pattern for a gesture, choosing color schemes and typography, planning information architecture."),
            (5, "Design follows analysis and requirements gathering in the UX process. It involves ideation, conceptual design, iterative prototyping, and refinement. Design decisions are validated through evaluation and inform implementation."),
            (6, "Good design starts with deep user understanding, explores multiple solutions, iterates rapidly, balances competing constraints, follows established principles while innovating appropriately, and validates decisions with users."),
            (7, "Design is broader than just UI (visual elements) - it includes conceptual and interaction design. It's more creative and generative than analysis. Design thinking is a specific approach to design that emphasizes empathy, ideation, and iteration."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Usability Engineering",
        definition: "A systematic, disciplined approach to developing usable systems through user-centered design methods, empirical measurement, and iterative refinement throughout the development process.",
        answers: &[
            (1, "Usability engineering is the systematic application of engineering principles to achieve usability in products. It involves defined processes, measurable goals, empirical testing, and iterative improvement to ensure systems are usable."),
            (2, "It's important because it provides structure and rigor to UX practice, ensuring usability is achieved through systematic methods rather than intuition alone. It makes UX measurable, trackable, and accountable to stakeholders."),
            (3, "Usability engineering is used throughout product development, particularly in organizations that need structured processes. It's common in enterprise software, safety-critical systems, and large organizations with defined development methodologies."),
            (4, "Examples include: setting quantitative usability targets (e.g., '90% of users complete checkout in under 2 minutes'), conducting structured usability tests, tracking metrics over time, creating usability specifications."),
            (5, "Usability engineering integrates with the software development lifecycle, adding specific UX activities at each phase: user research early, design and prototyping during development, testing before release, and post-launch evaluation."),
            (6, "Effective usability engineering involves: clear, measurable usability goals; systematic user testing; documented processes; iterative refinement based on data; and integration with engineering workflows and timelines."),
            (7, "Usability engineering is more structured and measurement-focused than general UX practice. It emphasizes the 'engineering' aspect - processes, metrics, repeatability. It's more formal than design thinking and focuses specifically on usability rather than broader UX."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Usability",
        definition: "The extent to which a product can be used by specified users to achieve specified goals with effectiveness, efficiency, and satisfaction in a specified context of use.",
        answers: &[
            (1, "Usability is the quality of a system that determines how easily and successfully users can accomplish their goals. It encompasses learnability, efficiency, memorability, error prevention/recovery, and satisfaction."),
            (2, "Usability is fundamental because even the most powerful features are useless if users can't figure out how to use them. High usability leads to productivity, user satisfaction, reduced errors, and lower support costs."),
            (3, "Usability is evaluated throughout design and development through various methods like usability testing, heuristic evaluation, and cognitive walkthroughs. It's a concern for any interactive system in any domain."),
            (4, "Examples include: Google's simple search interface (easy to learn and use), keyboard shortcuts in professional software (efficiency for expert users), clear error messages that help recovery, consistent navigation patterns."),
            (5, "Usability is one component of overall UX, alongside usefulness and emotional impact. It's assessed during evaluation phases and drives design refinements throughout the iterative UX process."),
            (6, "High usability means: new users learn quickly, experienced users work efficiently, users remember how to use it after breaks, errors are rare and easily corrected, and users are satisfied with the interaction."),
            (7, "Usability is narrower than UX (which includes emotional and value aspects). It's more objective and measurable than 'user-friendliness'. Usability is a necessary but not sufficient condition for good UX - a system can be usable but not useful or delightful."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Usefulness",
        definition: "The degree to which a product provides the functionality and capabilities needed to accomplish users' actual goals and tasks effectively.",
        answers: &[
            (1, "Usefulness refers to whether a system provides the right functionality to help users accomplish their real goals. It's about having features that matter and solve actual problems, not just being easy to use."),
            (2, "Usefulness is critical because even the most usable system fails if it doesn't do what users need. Users won't adopt products that don't solve their problems, regardless of how well-designed the interface is."),
            (3, "Usefulness is determined during requirements analysis and validated through user research and evaluation. It's assessed when deciding what features to build and whether the product meets real user needs."),
            (4, "Examples include: email is useful for communication, GPS navigation is useful for finding directions, spreadsheets are useful for calculations. A beautifully designed app for a problem no one has is not useful."),
            (5, "Usefulness is determined early in the UX process through contextual inquiry and requirements extraction. It drives what features are designed and implemented. Along with usability and emotional impact, it comprises overall UX."),
            (6, "High usefulness means: the system solves real user problems, provides necessary functionality, supports actual workflows, delivers value that justifies the effort to use it, and meets or exceeds user expectations for capabilities."),
            (7, "Usefulness is about 'what' capabilities a system has, while usability is about 'how well' those capabilities work. Both are necessary for good UX. A system can be highly usable but not useful (solves wrong problem) or vice versa (right features, bad interface)."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Emotional Impact",
        definition: "The affective and emotional response users have when interacting with a product, including feelings of joy, frustration, trust, delight, or anxiety.",
        answers: &[
            (1, "Emotional impact refers to the feelings and emotional responses evoked by interacting with a product - whether it delights, frustrates, builds trust, creates anxiety, or generates other emotional responses in users."),
            (2, "Emotional impact is important because emotions strongly influence user behavior, adoption, loyalty, and recommendations. Products that create positive emotional connections build stronger user relationships and competitive advantages beyond functionality."),
            (3, "Emotional impact is considered throughout design, particularly in emotional perspective design and aesthetic decisions. It's especially important in consumer products, brands, and experiences where emotional connection differentiates competitors."),
            (4, "Examples include: Apple products creating feelings of premium quality, video games generating excitement, bank apps building trust through professional design, error messages causing frustration, delightful animations creating joy."),
            (5, "Emotional impact is one of three pillars of UX (with usability and usefulness). It's shaped by design decisions in visual design, interaction design, and microcopy. It's assessed through qualitative evaluation methods."),
            (6, "Positive emotional impact comes from: beautiful aesthetics, delightful micro-interactions, personality in copy, smooth animations, exceeding expectations, showing care for details, creating moments of joy, and building trust through consistency."),
            (7, "Emotional impact goes beyond usability (which is more functional) and usefulness (which is about capability). It's less measurable than usability but equally important for overall UX. It's what makes products 'lovable' rather than just 'usable'."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Interaction Design",
        definition: "The practice of designing interactive digital products, environments, systems, and services, with particular focus on defining the behavior of the system and how users interact with it.",
        answers: &[
            (1, "Interaction design focuses on defining how users interact with a system - the behaviors, flows, responses, and dynamics of the interaction. It's about designing the dialogue between user and system over time."),
            (2, "Interaction design is crucial because it determines whether users can successfully accomplish their goals through the interface. It bridges user intentions and system capabilities by defining the interactive behaviors."),
            (3, "Interaction design occurs after conceptual design and before detailed visual design. It's practiced by interaction designers working on any interactive system - apps, websites, devices, installations, or services."),
            (4, "Examples include: designing swipe gestures for mobile interfaces, defining the behavior of drag-and-drop, creating the flow of a multi-step form, specifying animations and transitions, designing voice interaction patterns."),
            (5, "Interaction design follows user research and conceptual design, informing UI design and prototyping. It defines the 'how' of user-system interaction, which is then visualized in UI design and tested through prototypes."),
            (6, "Good interaction design is: responsive and provides immediate feedback, follows user expectations and mental models, is consistent within the system, supports user control, prevents errors, and creates smooth, natural-feeling interactions."),
            (7, "Interaction design is more behavioral/temporal than UI design (which is visual/spatial). It's more specific than UX (which is holistic) and more detailed than conceptual design (which is high-level). It focuses on the dynamic aspects of the interface."),
        ],
        children: &[],
    },
];

// Category 2: UX in Software Engineering

static UX_IN_SE_TERMS: &[SeedTerm] = &[
    SeedTerm {
        name: "Locus of Influence in an Organization",
        definition: "The point or level within an organization's structure where UX professionals have the most impact and decision-making power, ranging from individual contributor to strategic leadership levels.",
        answers: &[
            (1, "Locus of influence refers to where in an organizational hierarchy UX practitioners have authority and impact. It can range from tactical (individual projects) to strategic (company-wide vision and culture)."),
            (2, "It's important because the locus of influence determines the scope and impact of UX work - whether UX shapes individual features, entire products, or organizational strategy. Higher locus enables greater impact on business outcomes."),
            (3, "This concept applies when considering UX maturity in organizations, planning career growth, or advocating for UX. It helps understand and improve how UX integrates into software development organizations."),
            (4, "Examples include: Junior designer influencing feature design (low locus), senior designer influencing product direction (medium locus), design executive influencing company strategy and culture (high locus)."),
            (5, "Locus of influence affects how UX connects with software engineering - higher locus means UX considerations are integrated earlier and more fundamentally into development processes and business decisions."),
            (6, "Effective UX influence involves: demonstrating value through metrics, building relationships with stakeholders, communicating in business terms, showing ROI of UX work, and gradually expanding sphere of impact."),
            (7, "Locus of influence is about organizational power/position, while UX maturity is about organizational capability. Higher locus enables better UX-SE integration but requires organizational buy-in and demonstrated value."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "UX-SE Success Components",
        definition: "The key factors that enable successful integration of UX and software engineering practices, including communication, shared understanding, aligned processes, and mutual respect between disciplines.",
        answers: &[
            (1, "UX-SE success components are the critical factors that enable UX and software engineering teams to work together effectively, including communication, timing, shared goals, mutual understanding, and integrated processes."),
            (2, "These components are vital because UX and SE must collaborate closely to deliver successful products. Without these factors, teams work in silos, leading to miscommunication, wasted effort, and poor product outcomes."),
            (3, "These components should be established and maintained throughout product development. They're essential in any organization where UX and engineering teams collaborate, especially in agile and iterative development environments."),
            (4, "Examples include: regular design-dev sync meetings, shared user story definitions, designers participating in sprint planning, developers involved in design reviews, common language and documentation, aligned timelines."),
            (5, "Success components enable the UX lifecycle to integrate with software development cycles. They ensure design work happens ahead of development, feedback loops function, and both disciplines contribute to better products."),
            (6, "Success looks like: designers and developers communicating regularly, shared understanding of user needs, design staying ahead of development, smooth handoffs, collaborative problem-solving, and mutual respect for each discipline's expertise."),
            (7, "Success components are the 'how' of integration, while locus of influence is about 'where' in the organization. Components are tactical practices; challenges are obstacles to achieving them."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Challenge of Connecting SE and UX",
        definition: "The difficulties in integrating UX practices with software engineering processes, including different timescales, methodologies, vocabularies, priorities, and ways of thinking between the disciplines.",
        answers: &[
            (1, "The challenges include: different timescales (design needs time ahead of development), different methodologies (design thinking vs. engineering processes), communication gaps, conflicting priorities, and cultural differences between disciplines."),
            (2, "Understanding these challenges is crucial for addressing them. Unresolved tensions lead to rushed design, implementation that doesn't match design intent, frustrated teams, and poor user experiences."),
            (3, "These challenges arise throughout product development, particularly during project planning, sprint planning, design handoffs, and when trying to integrate UX into existing engineering-dominated processes."),
            (4, "Examples include: designers not having enough lead time before development sprints, developers changing designs without UX input, different vocabularies causing miscommunication, pressure to skip user research, tension over technical feasibility."),
            (5, "These challenges affect the entire UX lifecycle - limiting time for proper research and iteration, forcing compromises in design, and reducing opportunities for evaluation. Addressing them enables better UX-SE integration."),
            (6, "Successfully addressing challenges involves: building mutual understanding, creating integrated processes with appropriate timing, establishing clear communication channels, respecting both disciplines' needs, and organizational support."),
            (7, "Challenges are obstacles to overcome, while success components are solutions/practices to implement. Understanding challenges helps identify what success components to establish."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Importance of UX in Software Development",
        definition: "The critical role UX plays in software development success, including impact on user adoption, satisfaction, productivity, business outcomes, and competitive differentiation.",
        answers: &[
            (1, "UX importance in software development refers to the significant impact user experience has on product success - affecting user adoption, satisfaction, retention, productivity, brand perception, and ultimately business outcomes."),
            (2, "UX is critical because software success depends on users actually using it effectively. Poor UX leads to abandoned products, support costs, lost customers, and competitive disadvantage. Good UX drives adoption, loyalty, and business success."),
            (3, "UX should be considered from project inception through post-launch maintenance. It's important in all software contexts - consumer apps, enterprise systems, internal tools, websites, and embedded software."),
            (4, "Examples of UX impact: iPhone's success partly due to superior UX, enterprise software adoption rates tied to usability, e-commerce conversion rates affected by checkout UX, app store ratings reflecting UX quality."),
            (5, "UX importance justifies investing in the full UX lifecycle - research, design, prototyping, and evaluation. It makes the business case for UX resources, tools, and integration into development processes."),
            (6, "Demonstrating UX importance effectively involves: showing metrics (increased conversion, reduced support calls), user feedback, competitive analysis, ROI calculations, and connecting UX outcomes to business goals."),
            (7, "Importance is the 'why' (business case for UX), while challenges describe 'what' makes integration difficult, and success components describe 'how' to achieve integration. Understanding importance helps justify addressing challenges."),
        ],
        children: &[],
    },
];

// Category 3: Overall UX Process

static UX_PROCESS_TERMS: &[SeedTerm] = &[
    SeedTerm {
        name: "UX Lifecycle, the Wheel",
        definition: "A cyclical model of the UX process showing the iterative phases of analysis, design, prototyping, and evaluation that repeat throughout product development.",
        answers: &[
            (1, "The UX Lifecycle (Wheel) is a circular model representing the iterative UX process: Analysis -> Design -> Prototyping -> Evaluation, then back to Analysis. It emphasizes the continuous, cyclical nature of UX work."),
            (2, "The Wheel is important because it shows UX is not linear but iterative. It guides teams through systematic UX activities while emphasizing continuous refinement based on evaluation feedback."),
            (3, "The Wheel is used throughout product development, from initial concept through launch and ongoing improvements. It provides structure for UX activities in any project, helping teams plan and sequence their work."),
            (4, "Example: Start with user research (Analysis), create designs (Design), build prototypes (Prototyping), test with users (Evaluation), refine based on findings (back to Analysis/Design), repeat until launch and beyond."),
            (5, "The Wheel encompasses the entire UX process. Analysis informs Design, which is realized through Prototyping, validated by Evaluation, leading to insights that drive the next cycle. Each phase connects to and depends on the others."),
            (6, "Using the Wheel well means: completing each phase appropriately, iterating multiple times, using evaluation to drive improvements, adapting the pace to project needs, and maintaining momentum through the cycle."),
            (7, "The Wheel shows the overall UX process structure, while specific methodologies (contextual inquiry, heuristic evaluation) are tools used within specific phases. The Wheel is process-level; methods are activity-level."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Iteration",
        definition: "The practice of repeatedly cycling through design, prototyping, and evaluation to progressively refine and improve a design based on feedback and learning.",
        answers: &[
            (1, "Iteration is the practice of repeating the design-prototype-evaluate cycle multiple times, each time refining the design based on what was learned. It's about progressive improvement through repeated cycles."),
            (2, "Iteration is crucial because good designs rarely emerge fully formed. It allows learning from mistakes, incorporating feedback, exploring alternatives, and progressively refining until the design meets user needs effectively."),
            (3, "Iteration happens throughout the UX process, from early conceptual iterations through detailed design refinements. It's used whenever there's uncertainty or room for improvement, which is nearly always in UX work."),
            (4, "Examples: sketching multiple concepts, testing a prototype, refining based on feedback, testing again; creating wireframes, getting feedback, revising, testing; multiple rounds of usability testing with improvements between rounds."),
            (5, "Iteration is the mechanism that drives the UX Wheel. Each cycle through Analysis-Design-Prototyping-Evaluation is an iteration. More iterations generally lead to better designs, though diminishing returns eventually occur."),
            (6, "Effective iteration involves: testing early and often, being open to change, making informed refinements based on data, knowing when to iterate vs. when to move forward, and balancing iteration with project timelines."),
            (7, "Iteration is a practice/activity, while the UX Wheel is a process model that incorporates iteration. Evaluation drives iteration by providing feedback. Iteration is how designs progressively improve through the Wheel."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Analysis",
        definition: "The phase of the UX process focused on understanding users, their work, their environment, and their needs through research and data interpretation to inform design.",
        answers: &[
            (1, "Analysis is the UX phase dedicated to understanding the problem space: who users are, what they're trying to accomplish, how they currently work, what problems they face, and what context surrounds their activities."),
            (2, "Analysis is critical because good design must be based on real user needs and context. Without proper analysis, teams risk building solutions for wrong problems or missing critical user needs and constraints."),
            (3, "Analysis occurs early in projects and at the start of each iteration. It includes contextual inquiry, contextual analysis, requirements extraction, and creating design-informing models to guide design work."),
            (4, "Examples: conducting user interviews, observing work practices, analyzing workflows, creating personas, building task models, identifying barriers, extracting requirements from research data."),
            (5, "Analysis is the first phase in the UX Wheel. It precedes Design by providing the understanding and requirements that inform design decisions. Analysis outputs (personas, scenarios, requirements) feed directly into Design."),
            (6, "Good analysis involves: direct user engagement, systematic data collection, thorough interpretation, creating useful models and artifacts, extracting actionable insights, and communicating findings effectively to inform design."),
            (7, "Analysis focuses on understanding (what is/what's needed), while Design focuses on creating (what could be). Analysis is research-oriented and convergent; Design is creative and divergent. Analysis informs Design."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Design",
        definition: "The phase of the UX process where creative solutions are generated and refined based on understanding from analysis, progressing from conceptual ideas to detailed specifications.",
        answers: &[
            (1, "In the UX process, Design is the phase where teams create solutions based on Analysis findings. It progresses from ideation and conceptual design through intermediate and detailed design to refined specifications ready for implementation."),
            (2, "The Design phase is essential because it transforms user understanding into concrete solutions. This is where creativity and problem-solving happen, generating ideas that address user needs identified in Analysis."),
            (3, "Design follows Analysis in the UX Wheel and precedes Prototyping. It occurs throughout product development, from initial concepts to detailed specifications, with iterative refinement based on evaluation."),
            (4, "Examples: brainstorming solutions, sketching concepts, creating storyboards, designing interaction flows, developing wireframes, creating visual compositions, specifying detailed interactions and behaviors."),
            (5, "Design sits between Analysis (which provides requirements and understanding) and Prototyping (which realizes designs for testing). Design takes inputs from Analysis and creates outputs that drive Prototyping and eventually implementation."),
            (6, "Effective Design involves: grounding decisions in Analysis findings, exploring multiple alternatives, progressing from rough to refined, balancing creativity with constraints, and preparing clear specifications for Prototyping/development."),
            (7, "Design is creative/generative (creating solutions), while Analysis is investigative/interpretive (understanding problems). Prototyping is about realization (making designs tangible). Design is the central creative phase of UX."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Prototyping",
        definition: "The phase of creating preliminary versions of the design to explore, communicate, and test ideas before full implementation, varying in fidelity and scope.",
        answers: &[
            (1, "Prototyping is the UX phase where designs are made tangible through representations ranging from paper sketches to interactive digital mockups. Prototypes make abstract design ideas concrete and testable."),
            (2, "Prototyping is crucial because it enables testing and validation before expensive implementation. It helps identify problems early, communicate designs to stakeholders, and explore alternatives cheaply and quickly."),
            (3, "Prototyping occurs after Design and before Evaluation in the UX Wheel, though it often overlaps with both. It happens throughout development, with increasing fidelity as designs mature and more aspects become validated."),
            (4, "Examples: paper sketches to test concepts, clickable wireframes to test navigation, interactive mockups to test detailed interactions, Wizard of Oz prototypes to test novel concepts, video prototypes to test concepts."),
            (5, "Prototyping follows Design (implementing design decisions) and enables Evaluation (providing something to test). Different prototype types serve different purposes across the design progression from conceptual to detailed."),
            (6, "Good prototyping involves: choosing appropriate fidelity for the questions being asked, creating prototypes quickly, testing the right aspects, avoiding over-investment before validation, and using prototypes to drive learning."),
            (7, "Prototyping is about realization/representation (making designs tangible), Design is about creation (generating solutions), and Evaluation is about assessment (validating designs). Prototypes are vehicles for learning through evaluation."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Evaluation",
        definition: "The phase of assessing designs through various methods to identify problems, validate decisions, and generate insights that drive improvements in the next iteration.",
        answers: &[
            (1, "Evaluation is the UX phase where designs are assessed to determine how well they meet user needs and usability standards. It uses various methods to identify issues, validate design decisions, and drive improvements."),
            (2, "Evaluation is essential because it provides objective feedback on design quality, catches problems before launch, validates assumptions, and generates insights that drive iterative improvement. It prevents shipping poor designs."),
            (3, "Evaluation occurs after Prototyping in the UX Wheel and feeds back into Analysis/Design for the next iteration. It happens throughout development, from early conceptual validation to pre-launch usability testing."),
            (4, "Examples: usability testing with real users, heuristic evaluation by experts, cognitive walkthroughs, A/B testing, analytics review, design critiques, accessibility audits."),
            (5, "Evaluation completes the UX Wheel cycle by assessing Prototypes, identifying issues, and generating insights that inform the next iteration's Analysis and Design. It's the critical feedback mechanism that drives improvement."),
            (6, "Effective evaluation involves: choosing appropriate methods for questions and stage, testing with representative users, systematic analysis, actionable findings, clear communication of results, and driving improvements in next iteration."),
            (7, "Evaluation is assessment/validation (judging quality), while Design is creation (generating solutions) and Analysis is investigation (understanding problems). Evaluation provides the feedback that enables iteration and improvement."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Tradeoffs",
        definition: "The necessary compromises and balanced decisions made when competing constraints, requirements, or design qualities cannot all be maximally satisfied simultaneously.",
        answers: &[
            (1, "Tradeoffs are the compromises made when you can't optimize everything simultaneously - balancing competing needs like speed vs. accuracy, simplicity vs. power, time vs. quality, or different user groups' needs."),
            (2, "Understanding tradeoffs is critical because design always involves constraints - time, budget, technical limitations, competing user needs. Good designers explicitly consider and make informed tradeoffs rather than ignoring tensions."),
            (3, "Tradeoff decisions occur throughout the UX process, particularly in Design when balancing requirements, and when scope/timeline pressures require prioritization. They're inherent in any real-world project with constraints."),
            (4, "Examples: simplifying UI for novices vs. providing power features for experts, spending time on research vs. design, depth vs. breadth in prototypes, innovation vs. familiarity, accessibility features vs. sleek aesthetics."),
            (5, "Tradeoffs affect all UX phases - how much time for Analysis vs. Design, prototype fidelity vs. speed, evaluation rigor vs. timeline. They're a constant reality that shapes decisions throughout the UX Wheel."),
            (6, "Managing tradeoffs well involves: making them explicit, understanding implications, using data to inform decisions, considering long-term impact, getting stakeholder input, and documenting rationale for future reference."),
            (7, "Tradeoffs are necessary compromises in real projects, while ideals are what you'd do with unlimited resources. Constraints create the need for tradeoffs. Different than prioritization, which is choosing what to do; tradeoffs are about balancing competing goods."),
        ],
        children: &[],
    },
];

// Category 4: Analysis

static ANALYSIS_TERMS: &[SeedTerm] = &[
    SeedTerm {
        name: "Contextual Inquiry",
        definition: "A user research method involving going into the user's environment to observe and interview them while they work, gathering rich contextual data about work practices and needs.",
        answers: &[
            (1, "Contextual inquiry is a field research method where researchers observe and interview users in their actual work environment while they perform real tasks, gathering rich, contextual understanding of work practices."),
            (2, "It's important because it reveals how people actually work (vs. how they say they work), uncovers tacit knowledge, identifies unarticulated needs, and provides authentic context that lab studies miss."),
            (3, "Contextual inquiry is used early in the UX process during the Analysis phase, before design begins. It's appropriate when you need deep understanding of user work, particularly for complex domains or existing workflows."),
            (4, "Examples: observing nurses using hospital systems during shifts, watching developers use code editors in their workspace, observing retail workers using POS systems during customer interactions."),
            (5, "Contextual inquiry is the primary data collection method in the Analysis phase. Its outputs (observations, interviews, artifacts) feed into contextual analysis, which creates models that inform design."),
            (6, "Good contextual inquiry involves: minimal disruption to natural work, active observation and note-taking, asking clarifying questions, collecting artifacts, focusing on work practice rather than opinions, and capturing rich detail."),
            (7, "Contextual inquiry differs from lab studies (natural vs. controlled environment), surveys (observation vs. self-report), and interviews alone (watching work vs. talking about work). It's ethnographic and context-rich."),
        ],
        children: &[
            SeedTerm {
                name: "System Concept Statement",
                definition: "A brief statement defining the high-level idea of what system or solution will support the work being studied, providing initial focus for inquiry.",
                answers: &[
                    (1, "A system concept statement is a brief, high-level description of the envisioned system or product that will support the work domain being studied. It provides initial direction without constraining the inquiry."),
                    (2, "It's important because it focuses the contextual inquiry effort on relevant aspects of work while remaining open to discovery. It helps researchers know what to pay attention to without biasing findings."),
                    (3, "The system concept statement is developed before beginning contextual inquiry and refined as understanding grows. It guides what work domains and practices to study."),
                    (4, "Examples: 'A mobile app to help field technicians access repair manuals and report issues,' 'A system to support collaborative scientific data analysis,' 'A tool for managing patient care coordination.'"),
                    (5, "The system concept statement initiates the Analysis phase by defining the problem space. It focuses contextual inquiry efforts, though findings may refine or challenge the initial concept."),
                    (6, "A good system concept statement is: brief (1-2 sentences), focused on supporting work (not specific features), open enough to allow discovery, and refined based on early findings if needed."),
                    (7, "Unlike detailed requirements (which are specific), the system concept is high-level and conceptual. Unlike design ideas (which are solutions), it describes the problem space and general intent."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Ethnography",
                definition: "The study of people and cultures through immersion in their environment, adapted in HCI to understand users' work practices, social context, and culture.",
                answers: &[
                    (1, "Ethnography is a research approach from anthropology involving immersing yourself in users' environments to understand their culture, practices, and context through observation and participation over extended periods."),
                    (2, "It's important in HCI because it reveals deep cultural and social factors affecting technology use, uncovers implicit norms and practices, and provides holistic understanding that survey/lab methods miss."),
                    (3, "Ethnographic approaches are used when deep cultural understanding is needed, particularly for complex social/organizational contexts, unfamiliar domains, or when designing systems that affect work culture."),
                    (4, "Examples: spending weeks in a hospital to understand clinical culture before designing medical software, embedding with a sales team to understand their communication patterns, observing classroom culture for educational technology."),
                    (5, "Ethnography is a foundational approach for contextual inquiry. It emphasizes cultural and social aspects of work, providing depth that informs all subsequent analysis and design work."),
                    (6, "Good ethnography involves: extended time in the field, building rapport with participants, observing without judging, noting cultural norms, understanding social relationships, and being open to unexpected findings."),
                    (7, "Ethnography is longer-term and more immersive than standard contextual inquiry, more focused on culture than task analysis, and more interpretive than quantitative research methods."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Work, Work Practice, Work Domain",
                definition: "Key concepts in contextual inquiry: work (user activities/tasks), work practice (how work is actually done), and work domain (the field/area where work occurs).",
                answers: &[
                    (1, "Work is what users do (tasks/activities), work practice is how they do it (methods, tools, collaboration, workarounds), and work domain is the field/context where it happens (nursing, software development, retail, etc.)."),
                    (2, "These concepts are important because they structure thinking about users: what they're trying to accomplish (work), how they currently accomplish it (practice), and where/why (domain). Understanding all three is essential for good design."),
                    (3, "These concepts frame contextual inquiry and analysis. Researchers study the work domain, observe work practices, and decompose work into understandable units for analysis and design."),
                    (4, "Examples: Domain=healthcare, Work=reviewing patient records and prescribing medication, Practice=using EMR system, checking with nurses, writing notes. Domain=software dev, Work=debugging, Practice=using debuggers/logs/print statements."),
                    (5, "Understanding work domain provides context, identifying specific work defines scope and goals, and studying work practice reveals how current tools/processes support or hinder work - all informing design."),
                    (6, "Good analysis distinguishes: the work itself (goals/outcomes), how it's currently done (practice - which may be inefficient), and domain constraints/culture. This helps identify improvement opportunities vs. necessary domain characteristics."),
                    (7, "Work is what needs accomplishing (goals), work practice is current methods (which designs might change), work domain is the context (which designs must fit). Work is stable, practice varies, domain provides constraints."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Interviews",
                definition: "Structured or semi-structured conversations with users to understand their work, needs, preferences, and experiences, often conducted during contextual inquiry.",
                answers: &[
                    (1, "Interviews are structured conversations where researchers ask users about their work, needs, experiences, and opinions. In contextual inquiry, they're often semi-structured and conducted while observing work."),
                    (2, "Interviews are important because they reveal user perspectives, motivations, preferences, and explanations for observed behaviors. They provide the 'why' behind the 'what' observed in field studies."),
                    (3, "Interviews are used during contextual inquiry (alongside observation), during requirements gathering, and sometimes during evaluation. They're appropriate when you need to understand user perspectives, not just observe behaviors."),
                    (4, "Examples: asking nurses why they use a particular workaround, having developers explain their debugging process, asking users to walk through their decision-making, conducting post-task interviews about experience."),
                    (5, "In contextual inquiry, interviews complement observation - you watch users work, then ask questions to understand their thinking. Interview data combines with observations and artifacts in contextual analysis."),
                    (6, "Good interviewing involves: open-ended questions, active listening, avoiding leading questions, asking for specific examples, following interesting threads, being comfortable with silence, and focusing on actual behaviors not hypotheticals."),
                    (7, "Interviews gather self-reported data (what people say), while observation captures actual behavior (what people do). Contextual inquiry combines both, since they often differ. Interviews alone miss tacit knowledge and actual practice."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Observations",
                definition: "Systematic watching and recording of users performing their work in natural settings to understand actual work practices and identify usability issues.",
                answers: &[
                    (1, "Observations involve systematically watching users perform their work in natural settings, carefully noting what they do, how they do it, tools they use, interactions with others, and problems they encounter."),
                    (2, "Observations are critical because people often can't articulate their own practices (tacit knowledge), may describe idealized rather than actual behavior, and perform workarounds they don't consider worth mentioning."),
                    (3, "Observations are central to contextual inquiry, occurring in users' actual work environments during real work activities. They're used whenever understanding actual practice (vs. reported practice) is important."),
                    (4, "Examples: watching a user struggle with a form, noting efficient keyboard shortcuts an expert uses, observing informal collaboration between coworkers, seeing workarounds users have developed."),
                    (5, "Observations generate raw data during contextual inquiry. This data is captured in work activity notes, later analyzed to create flow models and work activity affinity diagrams, ultimately informing design."),
                    (6, "Good observation involves: minimal interference with natural work, detailed note-taking, noticing both smooth and problematic moments, watching the whole context (not just screen), and asking clarifying questions without disrupting flow."),
                    (7, "Observations capture actual behavior (what happens), while interviews capture reported behavior (what users say happens). Observations are more objective but need interpretation; interviews provide subjective context and explanations."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Work Activity Data",
                definition: "The raw information collected during contextual inquiry, including observations, interview responses, artifacts, and notes about work practices and context.",
                answers: &[
                    (1, "Work activity data is all the raw information gathered during contextual inquiry: observation notes, interview transcripts, photos, collected artifacts, sketches, and any other records of what was learned about user work."),
                    (2, "This data is important because it's the foundation for all subsequent analysis. Rich, detailed work activity data enables creation of accurate models, extraction of real requirements, and deep understanding that informs design."),
                    (3, "Work activity data is collected during contextual inquiry sessions and becomes the input for contextual analysis activities like creating work activity notes, flow models, and affinity diagrams."),
                    (4, "Examples: notes about a nurse's workflow, photos of a technician's workspace, a printed form users annotate, quotes from interviews, timing notes about task duration, sketches of physical layouts."),
                    (5, "Work activity data flows from contextual inquiry into contextual analysis. It's the raw material that gets organized, interpreted, and synthesized into useful models and requirements that guide design."),
                    (6, "Quality work activity data is: detailed and specific, captures context, includes verbatim quotes, records both successes and problems, notes emotional responses, and covers diverse situations and users."),
                    (7, "Work activity data is raw and uninterpreted, while work activity notes are organized interpretations. Data is the direct capture; analysis involves organizing and making sense of it."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Work Artifacts",
                definition: "Physical or digital objects users create or interact with during their work, such as forms, documents, tools, notes, or output products.",
                answers: &[
                    (1, "Work artifacts are the physical and digital objects that are part of users' work - forms they fill out, documents they create, tools they use, notes they keep, Post-its on monitors, checklists, reports, etc."),
                    (2, "Artifacts are important because they reveal actual work practices, show what information users need, demonstrate workarounds, and provide concrete examples of work inputs/outputs that systems must support."),
                    (3, "Artifacts are collected during contextual inquiry (photographed, copied, or noted), then analyzed to understand their role in work. They contribute to artifact models and inform requirements."),
                    (4, "Examples: Post-it notes with passwords, printed forms users annotate, spreadsheets used for tracking, email templates, handwritten logs, checklists taped to monitors, customized tool configurations."),
                    (5, "Artifacts are discovered during contextual inquiry, inform artifact models in design-informing models, and reveal requirements about information needs and workflows that must be supported in design."),
                    (6, "Analyzing artifacts well involves: collecting/documenting them, understanding their purpose in work, noting modifications users make, identifying information they contain, and recognizing what needs they fulfill."),
                    (7, "Artifacts are concrete objects (things), while work activity data includes observations and notes (information about things and behaviors). Artifacts are physical/digital evidence of work practices."),
                ],
                children: &[],
            },
        ],
    },
    SeedTerm {
        name: "Contextual Analysis",
        definition: "The process of organizing, interpreting, and synthesizing work activity data to create structured representations and extract insights about user work.",
        answers: &[
            (1, "Contextual analysis is the systematic process of organizing and making sense of work activity data by creating structured representations like work activity notes, flow models, and work activity affinity diagrams."),
            (2, "It's important because raw data alone doesn't drive design - it must be organized, interpreted, and synthesized to reveal patterns, identify barriers, and extract actionable insights about user needs."),
            (3, "Contextual analysis follows contextual inquiry in the Analysis phase. It transforms raw observations and interviews into organized, interpretable representations that inform requirements and design."),
            (4, "Examples: organizing field notes into work activity notes, drawing flow models from observed workflows, building affinity diagrams to find themes, identifying common barriers users face."),
            (5, "Contextual analysis sits between data collection (contextual inquiry) and design. It processes raw work activity data into models and insights that inform requirements extraction and design-informing models."),
            (6, "Effective contextual analysis involves: systematic organization of data, collaborative interpretation, creation of visual models, identification of patterns across users, and extraction of actionable design insights."),
            (7, "Contextual inquiry is data collection (gathering), while contextual analysis is data interpretation (making sense). Inquiry is field research; analysis is synthesis work typically done after returning from the field."),
        ],
        children: &[
            SeedTerm {
                name: "Work Activity Notes",
                definition: "Organized, cleaned-up notes from contextual inquiry sessions that structure observations and findings into a usable format for analysis.",
                answers: &[
                    (1, "Work activity notes are cleaned-up, organized versions of raw field notes from contextual inquiry, structured to highlight key observations, quotes, insights, and findings in a usable format."),
                    (2, "They're important because raw field notes are often messy and hard for others to use. Work activity notes make findings accessible to the team and provide organized input for further analysis."),
                    (3, "Work activity notes are created shortly after contextual inquiry sessions while memories are fresh. They're used as input for creating flow models, affinity diagrams, and requirements extraction."),
                    (4, "Examples: organized notes with sections for workflow observed, pain points, quotes, artifacts seen, context description, and researcher interpretations/questions."),
                    (5, "Work activity notes are the first step in contextual analysis, transforming raw data into organized form. They feed into all subsequent analysis activities and become reference material throughout the project."),
                    (6, "Good work activity notes are: organized clearly, capture key quotes verbatim, distinguish observation from interpretation, include enough context for others to understand, and are created while memory is fresh."),
                    (7, "Work activity notes are organized interpretations of raw data (which is messy/incomplete), more detailed than flow models (which are visual summaries), and input for creating affinity diagrams (which synthesize across sessions)."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Flow Model",
                definition: "A diagram showing the flow of information, artifacts, and communication between people, systems, and groups in a work process.",
                answers: &[
                    (1, "A flow model is a visual diagram showing how information, artifacts, and communication flow between people, roles, and systems during work processes. It shows who talks to whom, what information is shared, and what artifacts move between actors."),
                    (2, "Flow models are important because they reveal communication patterns, information bottlenecks, coordination requirements, and collaboration structures that systems must support or improve."),
                    (3, "Flow models are created during contextual analysis based on observations from contextual inquiry. They're also used as design-informing models and can show both current and envisioned situations."),
                    (4, "Examples: diagram showing doctor->nurse->pharmacy medication order flow, showing sales->engineering->customer communication patterns, showing how bug reports flow through a development team."),
                    (5, "Flow models are created during contextual analysis and also appear in design-informing models as usage models. They help identify communication needs that designs must address."),
                    (6, "Good flow models: clearly show actors/roles, indicate information/artifact flows with labeled arrows, note breakdowns or bottlenecks, distinguish different types of communication, and focus on relevant work aspects."),
                    (7, "Flow models show information/communication flows (between entities), while hierarchical task inventories show task decomposition (within work). Flow models are social/collaborative; task models are individual work-focused."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Work Activity Affinity Diagram (WAAD)",
                definition: "A hierarchical organization of observations from multiple contextual inquiry sessions, grouping related findings to reveal patterns and themes across users.",
                answers: &[
                    (1, "A WAAD is created by writing individual observations on notes, then collaboratively grouping related notes into clusters, creating hierarchical categories that reveal themes and patterns across multiple contextual inquiry sessions."),
                    (2, "WAADs are important because they synthesize findings across users, revealing common patterns and needs rather than individual quirks. They help teams build shared understanding and identify design priorities."),
                    (3, "WAADs are created during contextual analysis after collecting data from multiple users. The team collaboratively builds them, then uses resulting themes to inform requirements and design."),
                    (4, "Examples: grouping notes about workflow problems, clustering observations about information needs, organizing findings about collaboration patterns, identifying common barriers users face."),
                    (5, "WAADs synthesize work activity notes from multiple contextual inquiry sessions, revealing patterns that inform requirements extraction and design-informing models. They help teams see the forest, not just trees."),
                    (6, "Effective WAAD creation involves: individual notes capturing single observations, bottom-up grouping, team collaboration to build shared understanding, hierarchical organization revealing themes, and labeling that captures meaning."),
                    (7, "WAADs synthesize across sessions (finding patterns), while work activity notes document individual sessions. WAADs are hierarchical and thematic; flow models are structural diagrams. WAADs reveal what; flow models show how."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Barriers",
                definition: "Obstacles, problems, or difficulties users encounter in their work that impede efficiency, effectiveness, or satisfaction - key targets for design solutions.",
                answers: &[
                    (1, "Barriers are obstacles users face during their work - inefficient processes, confusing interfaces, missing information, communication gaps, system limitations, or any factors that impede work accomplishment."),
                    (2, "Identifying barriers is crucial because they represent opportunities for improvement. Designs that remove or reduce barriers directly improve user experience and work effectiveness."),
                    (3, "Barriers are identified during contextual inquiry (observation), highlighted in contextual analysis, and become primary drivers for requirements and design solutions."),
                    (4, "Examples: waiting for system responses, hunting for needed information, switching between multiple applications, manual data re-entry, unclear error messages, inadequate access to expert knowledge."),
                    (5, "Barriers identified in Analysis directly inform Design by highlighting what problems must be solved. They appear in requirements and drive design decisions about what functionality and interaction patterns to include."),
                    (6, "Good barrier analysis involves: documenting specific instances, understanding root causes not just symptoms, assessing impact and frequency, and identifying which barriers designs can realistically address."),
                    (7, "Barriers are problems (what's wrong), while requirements specify solutions (what's needed). Identifying barriers is descriptive (current state); requirements are prescriptive (desired state). Barriers drive requirement creation."),
                ],
                children: &[],
            },
        ],
    },
    SeedTerm {
        name: "Requirements",
        definition: "Specifications of what the system must do or provide to meet user needs and support their work effectively, derived from analysis of user work.",
        answers: &[
            (1, "Requirements are specific statements about what a system must do or provide to meet user needs. They specify capabilities, functions, qualities, and constraints that designs must satisfy."),
            (2, "Requirements are critical because they bridge analysis and design - translating user needs into actionable specifications that guide what to build. They ensure designs address real user needs."),
            (3, "Requirements are extracted during the Analysis phase after contextual inquiry and analysis. They guide Design activities and provide criteria for Evaluation."),
            (4, "Examples: 'System must support collaborative editing,' 'Users must be able to filter results by date,' 'Response time must be under 2 seconds,' 'Must work offline with sync capability.'"),
            (5, "Requirements are extracted from analysis findings (observations, barriers, user needs). They guide design by specifying what must be included, and drive evaluation by providing success criteria."),
            (6, "Good requirements are: specific and clear, derived from real user needs (with rationale), testable/verifiable, prioritized by importance, and focused on what (not how - that's design)."),
            (7, "Requirements specify what systems must do (functional) or what qualities they must have (non-functional). Unlike design decisions (which specify how), requirements specify the must-haves that designs must satisfy."),
        ],
        children: &[
            SeedTerm {
                name: "Requirements Extraction",
                definition: "The process of deriving specific system requirements from analysis of user work, using deductive reasoning to identify what the system must provide.",
                answers: &[
                    (1, "Requirements extraction is the systematic process of deriving specific requirements from analysis findings - examining observations, barriers, and user needs to determine what capabilities the system must have."),
                    (2, "It's important because it ensures requirements are grounded in actual user needs rather than assumptions. It creates the bridge from 'what we learned' (analysis) to 'what we must build' (design)."),
                    (3, "Requirements extraction occurs during the Analysis phase, after contextual inquiry and analysis have been completed. It uses those findings to derive specific system requirements."),
                    (4, "Examples: from observing users switching between apps, extract requirement for integrated interface; from users struggling to find information, extract requirement for robust search functionality."),
                    (5, "Requirements extraction takes contextual analysis outputs (barriers, work activity patterns) and transforms them into requirements that drive design decisions and evaluation criteria."),
                    (6, "Effective extraction involves: using deductive reasoning, tracing requirements to specific findings, including rationale, being specific about needs, distinguishing must-haves from nice-to-haves."),
                    (7, "Extraction is the process (how you derive requirements), while requirements are the output (the specifications themselves). Extraction uses deductive reasoning; analysis uses inductive pattern-finding."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Deductive Reasoning",
                definition: "Logical reasoning from general observations to specific conclusions, used in requirements extraction to derive specific requirements from general findings.",
                answers: &[
                    (1, "Deductive reasoning in UX involves starting with general observations or findings and logically deriving specific requirements or design implications. It's reasoning from general to specific."),
                    (2, "It's important because it creates logical connections between what was observed and what's needed, ensuring requirements are justified by evidence rather than hunches."),
                    (3, "Deductive reasoning is used during requirements extraction and when making design decisions based on research findings. It helps justify design choices with logical arguments from evidence."),
                    (4, "Examples: 'Users frequently switch between email and calendar (observation) -> System must integrate email and calendar (requirement).' 'Users forget passwords (observation) -> Must provide password reset (requirement).'"),
                    (5, "Deductive reasoning connects analysis findings to requirements and design decisions, providing logical justification throughout the UX process."),
                    (6, "Good deductive reasoning: makes logical connections explicit, checks that conclusions follow from premises, considers alternative interpretations, and documents the reasoning chain."),
                    (7, "Deductive reasoning goes from general to specific (findings -> requirements), while inductive reasoning (used in analysis) goes from specific to general (observations -> patterns). Both are used in UX."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Rationale",
                definition: "The justification or reasoning explaining why a requirement or design decision is necessary, linking it back to user needs and research findings.",
                answers: &[
                    (1, "Rationale is the explanation of why a requirement or design decision is necessary - the user needs, observations, or business reasons that justify it. It connects decisions to their evidence base."),
                    (2, "Rationale is critical because it: enables evaluation of requirements, helps prioritization, prevents arbitrary changes, educates stakeholders, and preserves understanding when team members change."),
                    (3, "Rationale should be documented with every requirement and major design decision. It's referenced during design reviews, when prioritizing, and when stakeholders question decisions."),
                    (4, "Examples: 'Requirement: Offline mode. Rationale: Field technicians often work in areas without connectivity (observed in sessions 3, 5, 7).' 'Design: Large buttons. Rationale: Primary users wear gloves (contextual inquiry finding).'"),
                    (5, "Rationale connects analysis findings to requirements and design decisions, creating traceability throughout the UX process. It justifies decisions and enables informed tradeoffs."),
                    (6, "Good rationale is: specific and detailed, references evidence (user quotes, observation notes), explains the user need or problem, and is documented clearly for future reference."),
                    (7, "Rationale explains 'why' (justification), while requirements state 'what' (specifications) and designs show 'how' (solutions). Rationale is the reasoning that connects research to decisions."),
                ],
                children: &[],
            },
        ],
    },
    SeedTerm {
        name: "Design-Informing Models (DIMs)",
        definition: "Structured representations of users, their work, and context that guide and inform design decisions, including user models, usage models, and work environment models.",
        answers: &[
            (1, "Design-informing models are structured representations synthesized from contextual analysis - user models, usage models, and work environment models - that capture what design must account for."),
            (2, "DIMs are important because they translate analysis findings into forms designers can act on directly, keeping design decisions grounded in observed work rather than assumption."),
            (3, "DIMs are created at the end of the Analysis phase and referenced throughout Design, from conceptual design through detailed specification."),
        ],
        children: &[
            SeedTerm {
                name: "Current Situation",
                definition: "Design-informing models representing how users currently work, including existing tools, processes, and problems - the 'as-is' state.",
                answers: &[
                    (1, "Current situation models describe the 'as-is' state of user work - existing tools, processes, workflows, and the problems embedded in them."),
                    (2, "Modeling the current situation matters because designs must improve on a real baseline; without it, teams cannot tell which problems a new design actually solves."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Envisioned Situation",
                definition: "Design-informing models representing how users will work with the new system, showing the improved 'to-be' state that design aims to achieve.",
                answers: &[
                    (1, "Envisioned situation models describe the 'to-be' state - how work will look once the new system is in place, showing the improvement the design intends to deliver."),
                    (2, "Envisioned models matter because they make the design target concrete and comparable against the current situation, exposing exactly what is supposed to change."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "User Models",
                definition: "Design-informing models that characterize the users - their roles, characteristics, goals, and behaviors - including work roles, user classes, and personas.",
                answers: &[
                    (1, "User models characterize who the users are - their work roles, classes, social structures, and persona representations - so design decisions can be checked against real user characteristics."),
                    (2, "User models matter because designing without a clear picture of the users invites designing for yourself; they keep the team anchored to the people observed in analysis."),
                ],
                children: &[
                    SeedTerm {
                        name: "Work Roles",
                        definition: "Distinct functional positions or jobs users occupy, each with specific responsibilities, goals, and work patterns relevant to system design.",
                        answers: &[
                            (1, "Work roles are the distinct functional positions in the work domain - each with its own responsibilities, goals, and patterns that the system must support."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "User Classes",
                        definition: "Groups of users with similar characteristics, needs, or usage patterns, often based on expertise level, frequency of use, or goals.",
                        answers: &[
                            (1, "User classes group users by shared characteristics - expertise level, frequency of use, goals - so designs can serve each class appropriately."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Social Models",
                        definition: "Representations of social structures, relationships, communication patterns, and collaborative work among users and groups.",
                        answers: &[
                            (1, "Social models capture the relationships, influence structures, and communication patterns among users and groups that shape how work actually gets done."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "User Personas",
                        definition: "Rich, realistic descriptions of archetypal users, bringing research findings to life through specific, relatable characters representing user classes.",
                        answers: &[
                            (1, "Personas are rich, realistic archetypal users built from research data - specific characters that stand in for user classes during design discussions."),
                        ],
                        children: &[],
                    },
                ],
            },
            SeedTerm {
                name: "Usage Models",
                definition: "Design-informing models that characterize user activities, tasks, and workflows, including flow models, task inventories, scenarios, and interaction models.",
                answers: &[
                    (1, "Usage models characterize what users do - flows of information and communication, task structures, narrative scenarios, and step-by-step interaction sequences."),
                    (2, "Usage models matter because they describe the activities the design must support, at every grain from whole workflows down to individual interaction steps."),
                ],
                children: &[
                    SeedTerm {
                        name: "Flow Model (in Usage Models context)",
                        definition: "A usage model showing how information, communication, and artifacts flow through a work process - same concept as in contextual analysis, used here as a design-informing model.",
                        answers: &[
                            (1, "The flow model reappears among usage models: the same information/communication diagram from contextual analysis, now used directly to inform design."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Hierarchical Task Inventory",
                        definition: "A structured breakdown of work tasks into hierarchical levels, showing main tasks decomposed into subtasks and steps, revealing task structure.",
                        answers: &[
                            (1, "A hierarchical task inventory decomposes work into a tree of tasks, subtasks, and steps, revealing the structure the system's functionality must cover."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Usage Scenarios",
                        definition: "Narrative descriptions of how users accomplish tasks or goals, providing context-rich stories about work that bring user models and usage patterns to life.",
                        answers: &[
                            (1, "Usage scenarios are narrative stories of users accomplishing goals - concrete, context-rich walkthroughs that make abstract task models tangible for designers."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Step-by-Step Task Interaction Model",
                        definition: "Detailed sequential description of user actions and system responses for specific tasks, showing the fine-grained interaction choreography.",
                        answers: &[
                            (1, "A step-by-step task interaction model records the fine-grained choreography of a task - each user action paired with the system response that follows it."),
                        ],
                        children: &[],
                    },
                ],
            },
            SeedTerm {
                name: "Work Environment Models",
                definition: "Design-informing models characterizing the physical and artifactual context where work occurs, including artifact models and physical models.",
                answers: &[
                    (1, "Work environment models capture the physical and artifactual context of work - the objects users handle and the spaces they work in."),
                    (2, "Environment models matter because physical context creates hard constraints (mobility, noise, space, lighting) that designs must accommodate."),
                ],
                children: &[
                    SeedTerm {
                        name: "Artifact Model",
                        definition: "Representation of objects and artifacts users interact with during work - forms, documents, tools, devices - showing their role in work processes.",
                        answers: &[
                            (1, "An artifact model documents the forms, documents, tools, and devices users work with, and the role each plays in the work process."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Physical Model",
                        definition: "Representation of the physical work environment - workspace layout, equipment, environmental conditions - showing how physical context affects work.",
                        answers: &[
                            (1, "Physical models document the physical work environment: workspace layouts, equipment placement, mobility constraints, environmental conditions (lighting, noise), and how physical context affects work."),
                            (2, "Physical models matter because physical context creates constraints and opportunities - mobile vs. stationary work, noisy environments, lighting conditions, and space limitations all affect design requirements."),
                        ],
                        children: &[],
                    },
                ],
            },
        ],
    },
];

// Category 5: Design

static DESIGN_TERMS: &[SeedTerm] = &[
    SeedTerm {
        name: "Design Thinking",
        definition: "A human-centered, iterative approach to problem-solving that emphasizes empathy, ideation, and experimentation to create innovative solutions.",
        answers: &[
            (1, "Design thinking is a creative problem-solving approach that emphasizes understanding human needs (empathy), generating many ideas (ideation), and learning through making (prototyping/testing). It's iterative, user-centered, and exploratory."),
            (2, "Design thinking is important because it provides a structured yet flexible approach to innovation, helps teams break free from assumptions, encourages exploration, and keeps focus on real human needs rather than just technical possibilities."),
            (3, "Design thinking is used throughout the Design phase, particularly in early conceptual design. It's applied when facing complex problems, seeking innovation, or needing to understand user needs deeply."),
            (4, "Examples: using empathy to understand user frustrations, brainstorming many solutions without judgment, rapidly prototyping ideas to test them, iterating based on feedback, considering emotional and ecological perspectives."),
            (5, "Design thinking shapes how Design is approached in the UX lifecycle - emphasizing empathy (from Analysis), ideation (generating options), and iteration (through prototyping and evaluation)."),
            (6, "Good design thinking involves: deep empathy with users, divergent thinking (many ideas), deferring judgment, making ideas tangible quickly, testing and learning, iterating based on feedback."),
            (7, "Design thinking is an approach/mindset (how to think about design), the design-thinking paradigm is a theoretical perspective (phenomenological), and specific methods like ideation are techniques within design thinking."),
        ],
        children: &[
            SeedTerm {
                name: "Design (What is it?)",
                definition: "The intentional, creative process of envisioning and planning solutions - in UX, specifically focused on creating user experiences that are usable, useful, and delightful.",
                answers: &[
                    (1, "Design is the creative act of envisioning how things should be - planning solutions, making decisions about form and function, imagining possibilities. It's intentional creation guided by understanding and constraints."),
                    (2, "Understanding what design is matters because it clarifies the designer's role (creative problem-solving, not just decoration), the design process (intentional exploration), and design's value (solving problems innovatively)."),
                    (3, "Design as an activity occurs throughout the UX lifecycle's Design phase, from conceptual through detailed design. It's the creative, generative work that transforms requirements into solutions."),
                    (4, "Examples of design activities: sketching interface concepts, planning interaction flows, choosing metaphors, making layout decisions, selecting visual styles, designing affordances."),
                    (5, "Design sits between Analysis (understanding) and Implementation (building). It transforms insights from Analysis into specifications for Implementation through creative problem-solving."),
                    (6, "Good design is: intentional (purposeful decisions), user-centered (based on user needs), creative (generating novel solutions), iterative (refining through feedback), and balanced (managing tradeoffs)."),
                    (7, "Design is creative/generative (making solutions), while analysis is investigative (understanding problems) and evaluation is critical (judging solutions). Design is the central creative act in UX."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Design Paradigms",
                definition: "Different theoretical frameworks for thinking about and approaching design, each emphasizing different aspects - engineering, cognitive, or phenomenological.",
                answers: &[
                    (1, "Design paradigms are fundamental frameworks for thinking about design - different perspectives on what matters most. The three paradigms are: engineering (optimizing performance), HIP (cognitive processing), and design-thinking (phenomenological experience)."),
                    (2, "Paradigms matter because they shape what designers pay attention to, what questions they ask, what they optimize for, and what methods they use. Different paradigms lead to different design outcomes."),
                    (3, "Paradigms are theoretical frameworks that guide design practice. Understanding them helps designers choose appropriate approaches for different contexts and avoid being limited by one perspective."),
                    (4, "Examples: engineering paradigm optimizing task completion time, HIP paradigm reducing cognitive load, design-thinking paradigm creating delightful emotional experiences."),
                    (5, "Design paradigms provide different lenses for the Design phase - each emphasizing different aspects of UX (performance, cognition, experience). Modern UX often combines insights from all three."),
                    (6, "Effective use of paradigms involves: understanding each perspective's strengths, choosing appropriately for context, combining insights from multiple paradigms, and recognizing when you're operating within a particular paradigm."),
                    (7, "Paradigms are overarching frameworks (theoretical perspectives), while methods are specific techniques (practical tools), and design perspectives (ecological/interaction/emotional) are complementary views within design-thinking."),
                ],
                children: &[
                    SeedTerm {
                        name: "Engineering Paradigm",
                        definition: "A design approach focused on optimizing measurable performance metrics like speed, accuracy, and efficiency through systematic engineering methods.",
                        answers: &[
                            (1, "The engineering paradigm approaches design as optimization of measurable performance - minimizing time, errors, and effort through systematic engineering methods and quantitative evaluation."),
                            (2, "This paradigm is important for task efficiency and performance. It provides rigorous, measurable approaches to improving productivity and reducing errors, particularly important for work systems."),
                            (4, "Examples: optimizing button placement for fastest clicking, reducing steps in workflows, minimizing error rates through constraints, measuring and improving task completion times."),
                            (7, "Engineering paradigm focuses on performance (speed/accuracy), HIP on cognition (mental processing), design-thinking on experience (emotional/phenomenological). Engineering is most quantitative and optimization-focused."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Human-Information Processing (HIP) Paradigm",
                        definition: "A design approach based on understanding human cognitive processes - perception, attention, memory, decision-making - and designing to support these processes.",
                        answers: &[
                            (1, "The HIP paradigm approaches design by understanding human cognitive processes (perception, attention, memory, thinking) and creating designs that work with, not against, these processes."),
                            (2, "HIP is important because it grounds design in cognitive science, helps designers understand and support how humans process information, and leads to interfaces that fit natural cognitive abilities and limitations."),
                            (4, "Examples: using chunking to support memory limitations, visual hierarchy supporting attention, recognition over recall, clear feedback supporting understanding of system state."),
                            (7, "HIP focuses on cognition (mental processes), engineering on performance (measurable outcomes), design-thinking on experience (emotional/phenomenological). HIP is most cognitive-science grounded."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Design-Thinking Paradigm",
                        definition: "A design approach emphasizing the phenomenological - lived experience, meaning-making, and holistic human experience beyond just performance or cognition.",
                        answers: &[
                            (1, "The design-thinking paradigm focuses on phenomenological concerns - the lived, felt experience of using systems, including meaning, emotion, aesthetics, and how technology fits into life holistically."),
                            (2, "This paradigm is important because it addresses aspects of experience that engineering and HIP miss - emotional impact, meaning, aesthetics, values - which are increasingly important for product differentiation and user satisfaction."),
                            (4, "Examples: designing for presence and flow, creating emotionally resonant experiences, considering aesthetic pleasure, designing for meaning and values, thinking ecologically about technology in life context."),
                            (7, "Design-thinking emphasizes experience/phenomenology, HIP emphasizes cognition, engineering emphasizes performance. Design-thinking is most qualitative and holistic, considering human experience beyond tasks."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Phenomenological Concerns",
                        definition: "Focus on the lived, subjective experience of using technology - how it feels, what it means, and how it fits into life - beyond objective performance or cognitive processing.",
                        answers: &[
                            (1, "Phenomenological concerns focus on subjective lived experience - how using technology feels, what meaning it has, how it affects presence and consciousness - the qualitative, experiential aspects beyond performance."),
                            (2, "These concerns are important because human experience isn't just cognitive processing or task performance - emotions, meanings, aesthetics, and life impact matter deeply for satisfaction and technology acceptance."),
                            (4, "Examples: designing for sense of presence in VR, creating flow experiences in games, building trust through aesthetics, considering meaning and values, designing for life balance not just productivity."),
                            (7, "Phenomenological is subjective/qualitative (how it feels), cognitive is mental-processing (how we think), engineering is objective/measurable (how it performs). Phenomenological addresses experience quality beyond function."),
                        ],
                        children: &[],
                    },
                ],
            },
            SeedTerm {
                name: "The Phenomenological Concept of Presence",
                definition: "The sense of 'being there' or engaged immersion in an experience - when technology becomes invisible and users feel present in the activity or virtual environment.",
                answers: &[
                    (1, "Presence is the phenomenological state where users feel fully immersed and engaged, technology becomes invisible, and they experience direct engagement with the activity or virtual environment without conscious awareness of the interface."),
                    (2, "Presence is important because it represents peak user experience - when technology successfully gets out of the way and users feel directly engaged with their goals, creating flow states and deep satisfaction."),
                    (3, "Presence is a design goal in immersive environments (VR, games), but also valuable in any interface where minimizing friction and maximizing engagement matters."),
                    (4, "Examples: VR experiences where users forget they're wearing a headset, games where players lose track of time, productivity tools that feel invisible, reading experiences where interface disappears."),
                    (5, "Presence represents a goal of good design - when usability, usefulness, and emotional impact combine so well that the interface becomes transparent and users feel directly connected to their activity."),
                    (6, "Designing for presence involves: minimizing friction, creating seamless interactions, reducing cognitive load, providing immediate feedback, maintaining flow, eliminating jarring interruptions."),
                    (7, "Presence is phenomenological (felt immersion), flow is psychological (optimal experience), usability is functional (easy to use). Presence is about consciousness and felt experience; usability enables it but isn't the same."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Design Perspectives",
                definition: "Three complementary viewpoints for design: ecological (technology in life context), interaction (user-system dialogue), and emotional (affective experience).",
                answers: &[
                    (1, "Design perspectives are three complementary lenses for viewing design problems: ecological (how technology fits in life/work context), interaction (the user-system dialogue), and emotional (affective responses)."),
                    (2, "Multiple perspectives are important because looking from different angles reveals different insights and opportunities. Each perspective highlights aspects the others might miss, leading to more complete designs."),
                    (3, "Perspectives are applied throughout design work, helping designers consider multiple facets of the design problem and ensure they're addressing ecological context, interaction quality, and emotional impact."),
                    (4, "Examples: ecological view considers work disruption, interaction view considers gesture intuitiveness, emotional view considers delight - same feature examined from three angles."),
                    (5, "Perspectives structure design thinking within the design-thinking paradigm, ensuring designers consider context, interaction, and emotion - creating holistic solutions."),
                    (6, "Using perspectives well: deliberately shift between views, ensure all three are considered, recognize which perspective is most critical for specific design problems, integrate insights from all three."),
                    (7, "Perspectives are complementary viewpoints (ways of looking), paradigms are theoretical frameworks (ways of thinking about design). Perspectives operate within the design-thinking paradigm."),
                ],
                children: &[
                    SeedTerm {
                        name: "Ecological Perspective",
                        definition: "A design viewpoint focusing on how technology fits into the broader context of users' lives, work, and environment - the system in its ecology.",
                        answers: &[
                            (1, "The ecological perspective views technology in its broader context - how it fits into users' lives, affects work practices, integrates with other tools, impacts social relationships, and influences overall life balance."),
                            (2, "Ecological perspective is important because technology doesn't exist in isolation - it affects and is affected by work practices, social dynamics, other tools, and life balance. Ignoring ecology leads to adoption failures."),
                            (4, "Examples: considering how notifications affect focus, how collaboration tools change team dynamics, how automation affects job satisfaction, how mobile access affects work-life boundaries."),
                            (7, "Ecological views context/environment (technology in life), interaction views dialogue (user-system exchange), emotional views feeling (affective response). Ecological is broadest, most contextual perspective."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Interaction Perspective",
                        definition: "A design viewpoint focusing on the dynamic dialogue between user and system - the back-and-forth exchange of actions and responses.",
                        answers: &[
                            (1, "The interaction perspective focuses on the user-system dialogue - how users act, how systems respond, the dynamics of the exchange, the interaction patterns and flows."),
                            (2, "Interaction perspective is crucial because it focuses on the core of HCI - the interaction itself. Quality interaction is fundamental to usability and user experience."),
                            (4, "Examples: designing how a system responds to user input, planning feedback timing and form, creating intuitive gesture mappings, specifying state transitions, designing conversational flows."),
                            (7, "Interaction views dialogue/exchange (dynamic user-system communication), ecological views context (technology in life), emotional views feeling (affective response). Interaction is most focused on the UI level."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Emotional Perspective",
                        definition: "A design viewpoint focusing on affective responses - the emotions, feelings, and emotional impact users experience when interacting with systems.",
                        answers: &[
                            (1, "The emotional perspective focuses on affective responses - what emotions the experience evokes, how it makes users feel, emotional impact of aesthetics, tone, and interaction qualities."),
                            (2, "Emotional perspective is important because emotions strongly influence user behavior, satisfaction, and loyalty. Emotional connections differentiate products and create memorable experiences beyond mere functionality."),
                            (4, "Examples: choosing colors for emotional effect, crafting empathetic error messages, adding delightful animations, selecting friendly vs. professional tone, creating trust through visual design."),
                            (7, "Emotional views feelings/affect (how it makes you feel), interaction views dialogue (how you interact), ecological views context (where it fits). Emotional is most focused on subjective affective response."),
                        ],
                        children: &[],
                    },
                ],
            },
            SeedTerm {
                name: "Designing with Personas",
                definition: "Using personas as design tools to guide decisions, maintain user focus, and create empathy throughout the design process.",
                answers: &[
                    (1, "Using personas actively in design decisions - referring to them when making choices, asking 'what would Sarah need here?', using them to resolve disagreements."),
                    (2, "Maintains user focus, prevents designing for yourself, creates shared understanding, helps prioritize features based on user needs."),
                    (3, "Throughout design activities - when brainstorming, making decisions, resolving conflicts, prioritizing features, evaluating designs."),
                    (4, "Asking 'Would this work for Sarah the nurse?', prioritizing features based on primary persona needs, using personas in scenarios and storyboards."),
                    (5, "Personas created in Analysis are actively used throughout Design to guide decisions, appear in scenarios, and inform evaluation criteria."),
                    (6, "Actually referring to personas during work, using them to resolve disagreements, creating scenarios with them, keeping them visible and top-of-mind."),
                    (7, "Designing with personas is active use (application), while creating personas is research synthesis (development). Using personas is a practice; personas are artifacts."),
                ],
                children: &[
                    SeedTerm {
                        name: "'Rich' and 'Sticky' Personas",
                        definition: "Personas with enough detail and personality to be memorable and create empathy - they 'stick' in designers' minds.",
                        answers: &[
                            (1, "Personas with sufficient detail, personality, and realistic qualities that make them memorable and help designers empathize and remember them easily."),
                            (2, "Rich personas create empathy and are actually used; thin personas are forgotten. Stickiness ensures personas actually influence design decisions."),
                            (4, "Including name, photo, background story, specific goals/frustrations, quotes, personality traits - making them feel like real people."),
                            (7, "Rich/sticky emphasizes quality (memorability), while primary/secondary emphasizes priority (which to design for first). Both are important persona characteristics."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Candidate Personas",
                        definition: "Initial set of possible personas identified from research, before selecting which will be primary or secondary.",
                        answers: &[
                            (1, "The initial set of potential personas identified from user research, representing different user types before prioritizing which are primary/secondary."),
                            (2, "You typically identify more user types than you can design for primarily, so candidates must be prioritized."),
                            (4, "From research finding 5 user types, creating candidate personas for each, then selecting 1-2 as primary based on business goals and reach."),
                            (7, "Candidates are the pool (all possibilities), primary is the selection (design priority). Candidates are created; primary is chosen from candidates."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Primary Persona",
                        definition: "The main persona(s) for whom the product is primarily designed - their needs drive core design decisions.",
                        answers: &[
                            (1, "The persona whose needs are the primary design driver - if satisfied, they'll be satisfied. Core functionality is optimized for them."),
                            (2, "You can't optimize for everyone, so identifying the primary user type focuses design and prevents trying to please everyone (pleasing no one)."),
                            (4, "For a professional tool, the experienced daily user is primary (not the manager who buys it or the new user)."),
                            (7, "Primary drives design (optimized for), secondary considered but not optimized for, candidate is before selection. Primary has highest design priority."),
                        ],
                        children: &[],
                    },
                ],
            },
            SeedTerm {
                name: "Ideation",
                definition: "The process of generating many diverse ideas rapidly, typically including both divergent (generating) and convergent (selecting) phases.",
                answers: &[
                    (1, "The creative process of generating many ideas quickly, including 'go mode' (divergent idea generation) and 'stop mode' (convergent critique/selection)."),
                    (2, "More ideas increase chances of finding good solutions. Separating generation from critique prevents premature rejection of promising ideas."),
                    (3, "Early in design, particularly conceptual design - when exploring possibilities before committing to specific directions."),
                    (4, "Brainstorming sessions, sketching many concepts rapidly, exploring diverse approaches before selecting which to develop."),
                    (5, "Ideation happens in early Design phase, generating options that will be prototyped, evaluated, and refined through iteration."),
                    (6, "Separating generation and critique, encouraging wild ideas, building on others' ideas, deferring judgment, generating quantity."),
                    (7, "Ideation is divergent/generative (creating options), while design refinement is convergent (narrowing options). Ideation creates possibilities; iteration refines them."),
                ],
                children: &[
                    SeedTerm {
                        name: "Idea Creation ('Go' Mode)",
                        definition: "Divergent phase of ideation focused purely on generating many ideas without critique or judgment.",
                        answers: &[
                            (1, "Divergent phase of ideation focused purely on generating many ideas without critique or judgment."),
                            (2, "Idea Creation ('Go' Mode) is important for effective ideation and design exploration."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Critiquing ('Stop' Mode)",
                        definition: "Convergent phase of ideation where ideas are evaluated, critiqued, and selected - separated from generation to avoid stifling creativity.",
                        answers: &[
                            (1, "Convergent phase of ideation where ideas are evaluated, critiqued, and selected - separated from generation to avoid stifling creativity."),
                            (2, "Critiquing ('Stop' Mode) is important for effective ideation and design exploration."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Brainstorming",
                        definition: "Structured group ideation technique with rules like deferring judgment, encouraging wild ideas, building on others, and going for quantity.",
                        answers: &[
                            (1, "Structured group ideation technique with rules like deferring judgment, encouraging wild ideas, building on others, and going for quantity."),
                            (2, "Brainstorming is important for effective ideation and design exploration."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Sketching",
                        definition: "Rapidly drawing rough representations of ideas to explore concepts quickly and make thinking visible.",
                        answers: &[
                            (1, "Rapidly drawing rough representations of ideas to explore concepts quickly and make thinking visible."),
                            (2, "Sketching is important for effective ideation and design exploration."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Physical Mockups",
                        definition: "Creating rough physical 3D representations of ideas using cardboard, foam, etc. to explore physical form.",
                        answers: &[
                            (1, "Creating rough physical 3D representations of ideas using cardboard, foam, etc. to explore physical form."),
                            (2, "Physical Mockups is important for effective ideation and design exploration."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Design Sketch vs. Low-Fidelity Prototype",
                        definition: "Sketches are quick explorations for thinking; low-fi prototypes are for testing/communication - sketches are more disposable.",
                        answers: &[
                            (1, "Sketches are quick explorations for thinking; low-fi prototypes are for testing/communication - sketches are more disposable."),
                            (2, "Design Sketch vs. Low-Fidelity Prototype is important for effective ideation and design exploration."),
                        ],
                        children: &[],
                    },
                ],
            },
        ],
    },
    SeedTerm {
        name: "Mental Models and Conceptual Design",
        definition: "Understanding user and designer mental models and creating conceptual designs that match user expectations and mental frameworks.",
        answers: &[
            (1, "Mental models are internal representations of how things work. Conceptual design creates system concepts matching user mental models."),
            (2, "When system models match user models, systems are intuitive. Mismatches cause confusion and usability problems."),
            (3, "Throughout design - understanding user models informs conceptual design, which guides detailed interaction and UI design."),
            (4, "Folder/file metaphor matches user mental model of document organization; shopping cart metaphor matches understanding of retail shopping."),
            (5, "Understanding mental models from Analysis informs conceptual Design, which drives detailed design and prototyping."),
            (6, "Understanding users' existing mental models, designing concepts that align with them, using appropriate metaphors."),
            (7, "Mental models are cognitive (how users think), conceptual design is structural (system concept). Models inform concept creation."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Affordances",
        definition: "Properties of objects or interface elements that suggest how they can be used - the perceived and actual possibilities for action.",
        answers: &[
            (1, "Affordances are action possibilities that objects offer - both actual (what's possible) and perceived (what users think is possible)."),
            (2, "Good affordances make interfaces discoverable and intuitive - users understand what actions are possible without instruction."),
            (3, "Considered throughout detailed design when creating interface elements - buttons, controls, interactive elements."),
            (4, "Button that looks pressable (physical affordance), underlined text suggesting clickability (sensory affordance), obvious drag handles (functional affordance)."),
            (5, "Affordances are key interaction design principles applied during Design phase, creating intuitive interfaces evaluated in Evaluation phase."),
            (6, "Making possible actions visible and obvious, using familiar patterns, providing clear visual cues for interactivity."),
            (7, "Affordances suggest action possibilities, while feedback confirms actions. Affordances are prospective (before action); feedback is retrospective (after action)."),
        ],
        children: &[
            SeedTerm {
                name: "Knowledge in the World vs. Knowledge in the Head",
                definition: "Information visible in interface (world) vs. remembered by user (head) - good design puts knowledge in world.",
                answers: &[
                    (1, "Information visible in interface (world) vs. remembered by user (head) - good design puts knowledge in world."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Cognitive Affordance",
                definition: "Mental action possibilities - what conceptual operations the interface supports or suggests.",
                answers: &[
                    (1, "Mental action possibilities - what conceptual operations the interface supports or suggests."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Physical Affordance",
                definition: "Physical action possibilities - what physical manipulations are possible (clicking, dragging, touching).",
                answers: &[
                    (1, "Physical action possibilities - what physical manipulations are possible (clicking, dragging, touching)."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Sensory Affordance",
                definition: "Perceptual cues suggesting affordances - visual, auditory, tactile indicators of action possibilities.",
                answers: &[
                    (1, "Perceptual cues suggesting affordances - visual, auditory, tactile indicators of action possibilities."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Functional Affordance",
                definition: "Higher-level action possibilities - what tasks or functions the interface supports.",
                answers: &[
                    (1, "Higher-level action possibilities - what tasks or functions the interface supports."),
                ],
                children: &[],
            },
        ],
    },
    SeedTerm {
        name: "UX Design Guidelines/Heuristics",
        definition: "Established principles and rules of thumb for creating usable interfaces, based on research and practice.",
        answers: &[
            (1, "Proven principles guiding interface design - generalizable rules helping create usable, learnable, efficient interfaces."),
            (2, "Codify best practices, provide design guidance, enable consistent quality, help identify problems in evaluation."),
            (3, "Referenced during Design to guide decisions, and during Evaluation (heuristic evaluation) to identify problems."),
            (4, "Consistency, feedback, error prevention, recognition over recall, aesthetic and minimalist design."),
            (5, "Guidelines inform Design decisions and provide Evaluation criteria in heuristic evaluation."),
            (6, "Understanding principles deeply, applying appropriately to context, balancing when guidelines conflict, using in design reviews."),
            (7, "Guidelines are general principles, while requirements are specific to project. Guidelines inform how to meet requirements."),
        ],
        children: &[
            SeedTerm {
                name: "Human Memory Limitations",
                definition: "Designing for limited working memory - chunking, recognition over recall, external memory aids.",
                answers: &[
                    (1, "Designing for limited working memory - chunking, recognition over recall, external memory aids."),
                    (2, "Human Memory Limitations is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "UX Guidelines in Context of Interaction Cycle",
                definition: "Guidelines organized by interaction phases: planning, action, perception, interpretation, evaluation.",
                answers: &[
                    (1, "Guidelines organized by interaction phases: planning, action, perception, interpretation, evaluation."),
                    (2, "UX Guidelines in Context of Interaction Cycle is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Attractiveness/Aesthetics",
                definition: "Visual appeal and beauty - creates positive first impressions, builds trust, affects perceived usability.",
                answers: &[
                    (1, "Visual appeal and beauty - creates positive first impressions, builds trust, affects perceived usability."),
                    (2, "Attractiveness/Aesthetics is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Accessibility",
                definition: "Ensuring interfaces are usable by people with diverse abilities - vision, hearing, motor, cognitive.",
                answers: &[
                    (1, "Ensuring interfaces are usable by people with diverse abilities - vision, hearing, motor, cognitive."),
                    (2, "Accessibility is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Efficiency",
                definition: "Minimizing time and effort required to accomplish tasks - streamlined workflows, shortcuts for experts.",
                answers: &[
                    (1, "Minimizing time and effort required to accomplish tasks - streamlined workflows, shortcuts for experts."),
                    (2, "Efficiency is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Memorability",
                definition: "Easy to remember after periods of non-use - consistent patterns, recognition cues, clear structure.",
                answers: &[
                    (1, "Easy to remember after periods of non-use - consistent patterns, recognition cues, clear structure."),
                    (2, "Memorability is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Error Prevention",
                definition: "Designing to prevent errors before they occur - constraints, confirmations, clear affordances.",
                answers: &[
                    (1, "Designing to prevent errors before they occur - constraints, confirmations, clear affordances."),
                    (2, "Error Prevention is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Robustness",
                definition: "Handling errors gracefully - helpful error messages, easy recovery, forgiving of mistakes.",
                answers: &[
                    (1, "Handling errors gracefully - helpful error messages, easy recovery, forgiving of mistakes."),
                    (2, "Robustness is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Satisfaction",
                definition: "Creating positive feelings - pleasant experience, meets expectations, emotionally satisfying.",
                answers: &[
                    (1, "Creating positive feelings - pleasant experience, meets expectations, emotionally satisfying."),
                    (2, "Satisfaction is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Functionality",
                definition: "Providing necessary features and capabilities - system does what users need.",
                answers: &[
                    (1, "Providing necessary features and capabilities - system does what users need."),
                    (2, "Functionality is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Operability",
                definition: "Ease of operation and control - intuitive interactions, clear controls, user has control.",
                answers: &[
                    (1, "Ease of operation and control - intuitive interactions, clear controls, user has control."),
                    (2, "Operability is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Learnability",
                definition: "Easy for new users to learn - clear, consistent, builds on existing knowledge.",
                answers: &[
                    (1, "Easy for new users to learn - clear, consistent, builds on existing knowledge."),
                    (2, "Learnability is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Understandability",
                definition: "Easy to understand what system does and how - clear labels, obvious functions, good information architecture.",
                answers: &[
                    (1, "Easy to understand what system does and how - clear labels, obvious functions, good information architecture."),
                    (2, "Understandability is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Simplicity",
                definition: "Removing unnecessary complexity - simple as possible but not simpler, avoiding feature bloat.",
                answers: &[
                    (1, "Removing unnecessary complexity - simple as possible but not simpler, avoiding feature bloat."),
                    (2, "Simplicity is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Visibility",
                definition: "Making important information and controls visible - don't hide critical functions, clear status.",
                answers: &[
                    (1, "Making important information and controls visible - don't hide critical functions, clear status."),
                    (2, "Visibility is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Feedback",
                definition: "System responds to actions - immediate, clear feedback confirming actions and showing results.",
                answers: &[
                    (1, "System responds to actions - immediate, clear feedback confirming actions and showing results."),
                    (2, "Feedback is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Consistency",
                definition: "Similar things look and behave similarly - internal consistency and external (platform) consistency.",
                answers: &[
                    (1, "Similar things look and behave similarly - internal consistency and external (platform) consistency."),
                    (2, "Consistency is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Constraints",
                definition: "Limiting actions to valid options - prevents errors, guides users to correct actions.",
                answers: &[
                    (1, "Limiting actions to valid options - prevents errors, guides users to correct actions."),
                    (2, "Constraints is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Natural Mappings",
                definition: "Logical relationships between controls and effects - spatial, cultural, or semantic mappings.",
                answers: &[
                    (1, "Logical relationships between controls and effects - spatial, cultural, or semantic mappings."),
                    (2, "Natural Mappings is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Usefulness",
                definition: "System provides value - solves real problems, meets real needs.",
                answers: &[
                    (1, "System provides value - solves real problems, meets real needs."),
                    (2, "Usefulness is a fundamental usability principle affecting user experience quality."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Nielsen's Original Heuristics",
                definition: "Jakob Nielsen's influential set of 10 usability heuristics for interface design and evaluation.",
                answers: &[
                    (1, "Ten widely-used heuristics by Jakob Nielsen for designing and evaluating interfaces."),
                    (2, "Most famous and widely-used heuristic set - provides concrete guidelines for design and evaluation."),
                    (3, "Used in heuristic evaluation and as design guidelines throughout interface design."),
                ],
                children: &[
                    SeedTerm {
                        name: "Visibility of System Status",
                        definition: "System keeps users informed about what's happening through appropriate, timely feedback.",
                        answers: &[
                            (1, "System keeps users informed about what's happening through appropriate, timely feedback."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Match Between System and Real World",
                        definition: "System speaks user's language with familiar words, phrases, and concepts rather than jargon.",
                        answers: &[
                            (1, "System speaks user's language with familiar words, phrases, and concepts rather than jargon."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "User Control and Freedom",
                        definition: "Users can undo/redo, exit flows easily - support exploratory learning without fear.",
                        answers: &[
                            (1, "Users can undo/redo, exit flows easily - support exploratory learning without fear."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Consistency and Standards",
                        definition: "Follow platform conventions - users shouldn't wonder if different words/actions mean same thing.",
                        answers: &[
                            (1, "Follow platform conventions - users shouldn't wonder if different words/actions mean same thing."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Error Prevention",
                        definition: "Eliminate error-prone conditions or check for them and present confirmation before committing.",
                        answers: &[
                            (1, "Eliminate error-prone conditions or check for them and present confirmation before committing."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Recognition Rather Than Recall",
                        definition: "Minimize memory load by making objects, actions, options visible - don't make users remember.",
                        answers: &[
                            (1, "Minimize memory load by making objects, actions, options visible - don't make users remember."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Flexibility and Efficiency of Use",
                        definition: "Shortcuts for experts, allowing customization - serves both novice and expert users.",
                        answers: &[
                            (1, "Shortcuts for experts, allowing customization - serves both novice and expert users."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Aesthetic and Minimalist Design",
                        definition: "Interfaces shouldn't contain irrelevant or rarely needed information - every extra unit competes.",
                        answers: &[
                            (1, "Interfaces shouldn't contain irrelevant or rarely needed information - every extra unit competes."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Help Users Recognize, Diagnose, and Recover from Errors",
                        definition: "Error messages in plain language, precisely indicate problem, constructively suggest solution.",
                        answers: &[
                            (1, "Error messages in plain language, precisely indicate problem, constructively suggest solution."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Help and Documentation",
                        definition: "Provide searchable, focused help - list concrete steps, not too large, accessible when needed.",
                        answers: &[
                            (1, "Provide searchable, focused help - list concrete steps, not too large, accessible when needed."),
                            (2, "One of Nielsen's 10 heuristics - fundamental to usability."),
                        ],
                        children: &[],
                    },
                ],
            },
        ],
    },
    SeedTerm {
        name: "Design Production",
        definition: "The progression from conceptual ideas through increasingly detailed and refined designs ready for implementation.",
        answers: &[
            (1, "The process of moving from rough concepts through intermediate and detailed design to refined specifications."),
            (2, "Bridges conceptual ideas and implementation - transforms concepts into implementable specifications."),
            (3, "After conceptual design, progressing through iterations to produce detailed designs for development."),
            (4, "Moving from sketches to wireframes to detailed comps, increasing fidelity and specificity at each stage."),
            (5, "Design production follows ideation/conceptual design, producing artifacts that guide prototyping and implementation."),
            (6, "Progressing systematically from rough to refined, validating at each level, specifying increasing detail appropriately."),
            (7, "Design production is the progression process, while specific artifacts (wireframes, comps) are outputs at different stages."),
        ],
        children: &[
            SeedTerm {
                name: "Design Iterations",
                definition: "Repeated cycles of design-prototype-evaluate-refine, progressively improving designs.",
                answers: &[
                    (1, "Repeated cycles of design-prototype-evaluate-refine, progressively improving designs."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Ideation, Conceptual Design, Intermediate Design, Detailed Design, Design Refinement",
                definition: "Progression from idea generation through concepts to intermediate specificity to full detail to polish.",
                answers: &[
                    (1, "Progression from idea generation through concepts to intermediate specificity to full detail to polish."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Wireframes",
                definition: "Low-fidelity sketches or layouts showing structure, content, functionality without visual design.",
                answers: &[
                    (1, "Low-fidelity sketches or layouts showing structure, content, functionality without visual design."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Wireframing Tools",
                definition: "Software for creating wireframes - Balsamiq, Sketch, Figma, etc.",
                answers: &[
                    (1, "Software for creating wireframes - Balsamiq, Sketch, Figma, etc."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Visual Comps",
                definition: "High-fidelity visual compositions showing final look with actual colors, typography, imagery.",
                answers: &[
                    (1, "High-fidelity visual compositions showing final look with actual colors, typography, imagery."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "UX Goals, Metrics, and Targets",
                definition: "Specific, measurable objectives for UX quality with target values to achieve.",
                answers: &[
                    (1, "Specific, measurable objectives for UX quality with target values to achieve."),
                ],
                children: &[],
            },
            SeedTerm {
                name: "Metrics",
                definition: "Measurements used to assess UX quality - can be quantitative/qualitative, subjective/objective, baseline/target.",
                answers: &[
                    (1, "Measurements for assessing UX - various types depending on what's measured and how."),
                ],
                children: &[
                    SeedTerm {
                        name: "Quantitative vs. Qualitative",
                        definition: "Quantitative: numerical measurements. Qualitative: descriptive observations.",
                        answers: &[
                            (1, "Quantitative: numerical measurements. Qualitative: descriptive observations."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Subjective vs. Objective",
                        definition: "Subjective: opinions/feelings. Objective: observable facts.",
                        answers: &[
                            (1, "Subjective: opinions/feelings. Objective: observable facts."),
                        ],
                        children: &[],
                    },
                    SeedTerm {
                        name: "Baseline Level vs. Target Level",
                        definition: "Baseline: current performance. Target: desired future performance.",
                        answers: &[
                            (1, "Baseline: current performance. Target: desired future performance."),
                        ],
                        children: &[],
                    },
                ],
            },
        ],
    },
];

// Category 6: Prototyping

static PROTOTYPING_TERMS: &[SeedTerm] = &[
    SeedTerm {
        name: "Depth and Breadth in Prototypes",
        definition: "Tradeoff between implementing features deeply (detail/functionality) vs. broadly (coverage/scope) - limited by time/resources.",
        answers: &[
            (1, "Tradeoff between implementing features deeply (detail/functionality) vs. broadly (coverage/scope) - limited by time/resources."),
            (2, "Depth and Breadth in Prototypes important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Vertical vs. Horizontal vs. 'T' vs. Local Prototypes",
        definition: "Vertical: deep on few features. Horizontal: shallow on many features. T: deep on some, shallow on others. Local: small isolated piece.",
        answers: &[
            (1, "Vertical: deep on few features. Horizontal: shallow on many features. T: deep on some, shallow on others. Local: small isolated piece."),
            (2, "Vertical vs. Horizontal vs. 'T' vs. Local Prototypes important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Fidelity of Prototypes",
        definition: "How closely prototype resembles final product - from low-fidelity sketches to high-fidelity interactive mockups.",
        answers: &[
            (1, "How closely prototype resembles final product - from low-fidelity sketches to high-fidelity interactive mockups."),
            (2, "Fidelity of Prototypes important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Interactivity of Prototypes",
        definition: "Degree to which prototype responds to user input - from static images to fully interactive simulations.",
        answers: &[
            (1, "Degree to which prototype responds to user input - from static images to fully interactive simulations."),
            (2, "Interactivity of Prototypes important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Click-Through Prototype",
        definition: "Interactive prototype where users click through screens/states - simulates navigation without full functionality.",
        answers: &[
            (1, "Interactive prototype where users click through screens/states - simulates navigation without full functionality."),
            (2, "Click-Through Prototype important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Wizard of Oz (WoZ) Prototyping",
        definition: "Human secretly provides system responses - lets you test concepts before building AI/complex functionality.",
        answers: &[
            (1, "Human secretly provides system responses - lets you test concepts before building AI/complex functionality."),
            (2, "Wizard of Oz (WoZ) Prototyping important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Paper-in-Device Prototype",
        definition: "Paper screens placed in device frame - combines physical device feel with quick iteration of paper.",
        answers: &[
            (1, "Paper screens placed in device frame - combines physical device feel with quick iteration of paper."),
            (2, "Paper-in-Device Prototype important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Animated Prototype",
        definition: "Prototype using animation to show transitions, micro-interactions, or temporal aspects of interaction.",
        answers: &[
            (1, "Prototype using animation to show transitions, micro-interactions, or temporal aspects of interaction."),
            (2, "Animated Prototype important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Video Prototype",
        definition: "Video showing envisioned interaction - good for communicating concepts and getting early feedback.",
        answers: &[
            (1, "Video showing envisioned interaction - good for communicating concepts and getting early feedback."),
            (2, "Video Prototype important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Prototyping Tools",
        definition: "Software for creating prototypes - Figma, Sketch, Adobe XD, InVision, etc.",
        answers: &[
            (1, "Software for creating prototypes - Figma, Sketch, Adobe XD, InVision, etc."),
            (2, "Prototyping Tools important for effective prototyping and testing."),
            (3, "Used during Prototyping phase to explore and test designs."),
        ],
        children: &[],
    },
];

// Category 7: Evaluation

static EVALUATION_TERMS: &[SeedTerm] = &[
    SeedTerm {
        name: "Formative vs. Summative",
        definition: "Formative: during development to improve design. Summative: after development to assess overall quality.",
        answers: &[
            (1, "Formative: during development to improve design. Summative: after development to assess overall quality."),
            (2, "Formative vs. Summative helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Analytic vs. Empirical",
        definition: "Analytic: expert inspection without users. Empirical: testing with real users.",
        answers: &[
            (1, "Analytic: expert inspection without users. Empirical: testing with real users."),
            (2, "Analytic vs. Empirical helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Rapid vs. Rigorous",
        definition: "Rapid: quick, informal evaluation for fast feedback. Rigorous: formal, controlled studies for definitive findings.",
        answers: &[
            (1, "Rapid: quick, informal evaluation for fast feedback. Rigorous: formal, controlled studies for definitive findings."),
            (2, "Rapid vs. Rigorous helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Qualitative vs. Quantitative Data",
        definition: "Qualitative: descriptive, rich observations. Quantitative: numerical measurements and statistics.",
        answers: &[
            (1, "Qualitative: descriptive, rich observations. Quantitative: numerical measurements and statistics."),
            (2, "Qualitative vs. Quantitative Data helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Subjective vs. Objective Data",
        definition: "Subjective: opinions, feelings, satisfaction. Objective: measurable facts, performance metrics.",
        answers: &[
            (1, "Subjective: opinions, feelings, satisfaction. Objective: measurable facts, performance metrics."),
            (2, "Subjective vs. Objective Data helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Design Walkthrough",
        definition: "Expert systematically walks through design imagining user actions and identifying issues.",
        answers: &[
            (1, "Expert systematically walks through design imagining user actions and identifying issues."),
            (2, "Design Walkthrough helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Usability Inspection",
        definition: "Expert examines interface against criteria to identify usability problems.",
        answers: &[
            (1, "Expert examines interface against criteria to identify usability problems."),
            (2, "Usability Inspection helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Heuristic Evaluation",
        definition: "Experts evaluate interface against established heuristics/guidelines (like Nielsen's 10).",
        answers: &[
            (1, "Experts evaluate interface against established heuristics/guidelines (like Nielsen's 10)."),
            (2, "Heuristic Evaluation helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "RITE (Rapid Iterative Testing and Evaluation)",
        definition: "Rapid testing methodology where problems are fixed immediately and retested.",
        answers: &[
            (1, "Rapid testing methodology where problems are fixed immediately and retested."),
            (2, "RITE (Rapid Iterative Testing and Evaluation) helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Rigorous Lab-Based Evaluation",
        definition: "Formal usability testing with controlled conditions, representative users, measurable outcomes.",
        answers: &[
            (1, "Formal usability testing with controlled conditions, representative users, measurable outcomes."),
            (2, "Rigorous Lab-Based Evaluation helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Quasi-Empirical UX Evaluation",
        definition: "User testing that's less formal than rigorous lab studies but more systematic than informal testing.",
        answers: &[
            (1, "User testing that's less formal than rigorous lab studies but more systematic than informal testing."),
            (2, "Quasi-Empirical UX Evaluation helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "Questionnaires",
        definition: "Written surveys gathering user feedback, satisfaction ratings, preferences, and opinions.",
        answers: &[
            (1, "Written surveys gathering user feedback, satisfaction ratings, preferences, and opinions."),
            (2, "Questionnaires helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
    SeedTerm {
        name: "'Discount' Evaluation",
        definition: "Quick, low-cost evaluation methods like simplified usability testing - lower rigor but faster insights.",
        answers: &[
            (1, "Quick, low-cost evaluation methods like simplified usability testing - lower rigor but faster insights."),
            (2, "'Discount' Evaluation helps assess design quality and identify improvements."),
            (3, "Applied during Evaluation phase to validate and improve designs."),
        ],
        children: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db() -> (Database, SeedSummary) {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        let summary = populate(&db).expect("Failed to populate database");
        (db, summary)
    }

    mod structure_tests {
        use super::*;

        #[test]
        fn seeds_seven_categories_in_order() {
            let (db, summary) = seeded_db();
            assert_eq!(summary.categories, 7);

            let cats = db.list_categories().unwrap();
            assert_eq!(cats.len(), 7);
            assert_eq!(cats[0].name, "General");
            assert_eq!(cats[3].name, "Analysis");
            assert_eq!(cats[3].order_num, 4);
            assert_eq!(cats[6].name, "Evaluation");
        }

        #[test]
        fn seeds_the_seven_standard_questions() {
            let (db, summary) = seeded_db();
            assert_eq!(summary.questions, 7);

            let questions = db.list_questions().unwrap();
            assert_eq!(questions.len(), 7);
            assert_eq!(questions[0].text, "What does it mean?");
            assert_eq!(questions[1].text, "Why is it important?");
            assert_eq!(
                questions[6].text,
                "How is it similar to or different than related terms?"
            );
        }

        #[test]
        fn summary_counts_match_store() {
            let (db, summary) = seeded_db();
            assert_eq!(db.term_count().unwrap(), summary.terms as i64);
            assert_eq!(db.answer_count().unwrap(), summary.answers as i64);
            assert!(summary.terms > 100);
        }

        #[test]
        fn every_child_sits_one_level_below_its_parent() {
            let (db, _) = seeded_db();
            let all = db.list_all_terms().unwrap();
            for term in &all {
                match term.parent_term_id {
                    None => assert_eq!(term.hierarchy_level, 0, "root {} not level 0", term.name),
                    Some(parent_id) => {
                        let parent = all.iter().find(|t| t.id == parent_id).unwrap();
                        assert_eq!(
                            term.hierarchy_level,
                            parent.hierarchy_level + 1,
                            "{} is not one level below {}",
                            term.name,
                            parent.name
                        );
                        assert_eq!(term.category_id, parent.category_id);
                    }
                }
            }
        }
    }

    mod scenario_tests {
        use super::*;

        #[test]
        fn contextual_inquiry_has_its_seven_children_in_order() {
            let (db, _) = seeded_db();
            let ci = db.find_term_id("Contextual Inquiry").unwrap().unwrap();
            let children = db.list_children(ci).unwrap();

            let names: Vec<&str> = children.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "System Concept Statement",
                    "Ethnography",
                    "Work, Work Practice, Work Domain",
                    "Interviews",
                    "Observations",
                    "Work Activity Data",
                    "Work Artifacts",
                ]
            );
            let orders: Vec<i64> = children.iter().map(|t| t.order_num).collect();
            assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7]);
            assert!(children.iter().all(|t| t.hierarchy_level == 1));
        }

        #[test]
        fn contextual_inquiry_is_a_root_term_in_analysis() {
            let (db, _) = seeded_db();
            let detail = db.get_term_detail("Contextual Inquiry").unwrap();
            assert_eq!(detail.category, "Analysis");

            let ci = db.find_term_id("Contextual Inquiry").unwrap().unwrap();
            let all = db.list_all_terms().unwrap();
            let term = all.iter().find(|t| t.id == ci).unwrap();
            assert_eq!(term.hierarchy_level, 0);
        }

        #[test]
        fn nielsen_heuristics_are_ten_in_canonical_order() {
            let (db, _) = seeded_db();
            let heuristics = db.nielsen_heuristics().unwrap();
            assert_eq!(heuristics.len(), 10);
            assert_eq!(heuristics[0].name, "Visibility of System Status");
            assert_eq!(heuristics[9].name, "Help and Documentation");
        }

        #[test]
        fn search_usability_matches_name_and_definitions() {
            let (db, _) = seeded_db();
            let hits = db.search_terms("usability").unwrap();
            assert!(hits.iter().any(|h| h.name == "Usability"));
            // Usability Engineering's definition mentions usable systems; the
            // term "Heuristic Evaluation" does not carry the substring in its
            // name but other terms do in their definitions.
            assert!(hits
                .iter()
                .any(|h| h.name != "Usability" && h.definition.to_lowercase().contains("usability")));
        }

        #[test]
        fn general_category_has_nine_terms() {
            let (db, _) = seeded_db();
            let cats = db.list_categories().unwrap();
            let general = cats.iter().find(|c| c.name == "General").unwrap();
            let terms = db.list_terms_by_category(general.id).unwrap();
            assert_eq!(terms.len(), 9);
            assert_eq!(terms[0].name, "Human-Computer Interaction (HCI)");
            assert_eq!(terms[8].name, "Interaction Design");
        }

        #[test]
        fn term_detail_carries_all_seven_answers_for_full_terms() {
            let (db, _) = seeded_db();
            let detail = db.get_term_detail("Usability").unwrap();
            assert_eq!(detail.answers.len(), 7);
            assert_eq!(detail.answers[0].question, "What does it mean?");
            assert_eq!(
                detail.answers[6].question,
                "How is it similar to or different than related terms?"
            );
        }

        #[test]
        fn quiz_prompts_exist_for_fully_answered_terms() {
            let (db, _) = seeded_db();
            let term_id = db.find_term_id("Contextual Inquiry").unwrap().unwrap();
            let key = db.key_answers(term_id).unwrap();
            assert_eq!(key.len(), 2);
            assert_eq!(key[0].question, "Why is it important?");
            assert_eq!(key[1].question, "When and/or where is it used?");
        }

        #[test]
        fn metrics_nest_three_levels_deep() {
            let (db, _) = seeded_db();
            let metrics = db.find_term_id("Metrics").unwrap().unwrap();
            let children = db.list_children(metrics).unwrap();
            let names: Vec<&str> = children.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "Quantitative vs. Qualitative",
                    "Subjective vs. Objective",
                    "Baseline Level vs. Target Level",
                ]
            );
            assert!(children.iter().all(|t| t.hierarchy_level == 2));
        }
    }
}
