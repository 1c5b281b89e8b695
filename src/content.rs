use crate::page::PageId;

/// An in-page button that opts in to page switching through its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub buttons: &'static [PageButton],
}

pub fn content_for(page: PageId) -> &'static PageContent {
    match page {
        PageId::Home => &HOME,
        PageId::History => &HISTORY,
        PageId::Modern => &MODERN,
        PageId::Food => &FOOD,
        PageId::Nature => &NATURE,
    }
}

static HOME: PageContent = PageContent {
    heading: "Zhengzhou, heart of the Central Plains",
    paragraphs: &[
        "A crossroads city on the south bank of the Yellow River, where three \
         thousand years of capitals sit under a skyline of glass towers.",
        "Use 1-5 or the arrow keys to move between sections, m for the menu, \
         and : to type an address.",
    ],
    buttons: &[
        PageButton {
            label: "Trace the history",
            target: "history",
        },
        PageButton {
            label: "Taste the city",
            target: "food",
        },
    ],
};

static HISTORY: PageContent = PageContent {
    heading: "Shang walls and temple bells",
    paragraphs: &[
        "The rammed-earth walls of the Shang city still ring the old town. \
         An hour west, Shaolin Temple keeps its drills under Mount Song.",
        "The Henan Museum holds bronzes, bone inscriptions, and the oldest \
         playable flutes ever found.",
    ],
    buttons: &[PageButton {
        label: "See the new city",
        target: "modern",
    }],
};

static MODERN: PageContent = PageContent {
    heading: "Zhengdong and the rail crossroads",
    paragraphs: &[
        "The Zhengdong district wraps a lake ringed by the corn-cob tower and \
         its convention halls.",
        "High-speed lines cross here in both directions, putting Beijing, \
         Shanghai, and Xi'an a few hours away.",
    ],
    buttons: &[PageButton {
        label: "Find dinner",
        target: "food",
    }],
};

static FOOD: PageContent = PageContent {
    heading: "Braised noodles and pepper soup",
    paragraphs: &[
        "Huimian: broad hand-pulled noodles in mutton broth, the city's \
         standing order at any hour.",
        "Hulatang for breakfast, peppery and thick, with fried dough on the side.",
    ],
    buttons: &[PageButton {
        label: "Walk it off",
        target: "nature",
    }],
};

static NATURE: PageContent = PageContent {
    heading: "River banks and the central peak",
    paragraphs: &[
        "The Yellow River scenic area looks out over the silt flats from the \
         Mang hills.",
        "Mount Song, the central sacred peak, folds five billion years of rock \
         into a single day's hike.",
    ],
    buttons: &[PageButton {
        label: "Back to the start",
        target: "home",
    }],
};
