use std::collections::HashSet;
use std::sync::OnceLock;

/// Offline tier of the lexicon: common English words answerable without a
/// network round trip. Anything outside this set goes to the remote
/// dictionary. Ordered roughly by length for easier eyeballing.
static COMMON_WORDS: &[&str] = &[
    // three letters
    "ace", "act", "add", "age", "ago", "aid", "aim", "air", "all", "and", "ant", "any", "ape",
    "apt", "arc", "are", "arm", "art", "ash", "ask", "ate", "awe", "axe", "bad", "bag", "ban",
    "bar", "bat", "bay", "bed", "bee", "beg", "bet", "big", "bit", "boa", "bog", "bow", "box",
    "boy", "bud", "bug", "bun", "bus", "but", "buy", "cab", "can", "cap", "car", "cat", "cob",
    "cod", "cog", "cot", "cow", "cry", "cub", "cue", "cup", "cut", "dab", "dam", "day", "den",
    "dew", "did", "dig", "dim", "dip", "doe", "dog", "dot", "dry", "dub", "due", "dug", "dye",
    "ear", "eat", "ebb", "eel", "egg", "ego", "elf", "elk", "elm", "end", "era", "eve", "eye",
    "fan", "far", "fat", "fee", "few", "fig", "fin", "fir", "fit", "fix", "flu", "fly", "foe",
    "fog", "for", "fox", "fry", "fun", "fur", "gap", "gas", "gel", "gem", "get", "gig", "gin",
    "got", "gum", "gun", "gut", "guy", "gym", "had", "ham", "has", "hat", "hay", "hen", "her",
    "hew", "hid", "him", "hip", "his", "hit", "hog", "hop", "hot", "how", "hub", "hue", "hug",
    "hum", "hut", "ice", "ill", "imp", "ink", "inn", "ion", "ire", "its", "ivy", "jab", "jam",
    "jar", "jaw", "jay", "jet", "jig", "job", "jog", "jot", "joy", "jug", "keg", "key", "kid",
    "kin", "kit", "lab", "lad", "lag", "lap", "law", "lay", "led", "leg", "let", "lid", "lie",
    "lip", "lit", "log", "lot", "low", "mad", "man", "map", "mat", "may", "men", "met", "mix",
    "mob", "mop", "mud", "mug", "nap", "net", "new", "nil", "nip", "nod", "nor", "not", "now",
    "nun", "nut", "oak", "oar", "oat", "odd", "ode", "off", "oil", "old", "one", "orb", "ore",
    "our", "out", "owe", "owl", "own", "pad", "pan", "par", "pat", "paw", "pay", "pea", "peg",
    "pen", "pet", "pie", "pig", "pin", "pit", "ply", "pod", "pop", "pot", "pry", "pub", "pun",
    "pup", "put", "rag", "ram", "ran", "rap", "rat", "raw", "ray", "red", "rib", "rid", "rig",
    "rim", "rip", "rob", "rod", "roe", "rot", "row", "rub", "rug", "rum", "run", "rut", "rye",
    "sad", "sag", "sap", "sat", "saw", "say", "sea", "see", "set", "sew", "she", "shy", "sin",
    "sip", "sir", "sit", "six", "ski", "sky", "sly", "sob", "sod", "son", "sow", "soy", "spa",
    "spy", "sum", "sun", "tab", "tag", "tan", "tap", "tar", "tax", "tea", "ten", "the", "thy",
    "tie", "tin", "tip", "toe", "ton", "top", "tow", "toy", "try", "tub", "tug", "two", "urn",
    "use", "van", "vat", "vet", "vie", "vow", "wag", "war", "was", "wax", "way", "web", "wed",
    "wet", "who", "why", "wig", "win", "wit", "woe", "won", "woo", "wry", "yak", "yam", "yes",
    "yet", "you", "zip", "zoo",
    // four letters
    "able", "acid", "aged", "also", "area", "army", "away", "baby", "back", "ball", "band",
    "bank", "base", "bath", "bear", "beat", "been", "bell", "belt", "bend", "best", "bird",
    "bite", "blow", "blue", "boat", "body", "bone", "book", "born", "both", "bowl", "burn",
    "bush", "busy", "cake", "call", "calm", "came", "camp", "card", "care", "cart", "case",
    "cash", "cast", "cave", "cell", "chat", "chin", "chip", "city", "clay", "clip", "club",
    "coal", "coat", "code", "coin", "cold", "come", "cook", "cool", "cope", "copy", "core",
    "corn", "cost", "crew", "crop", "dark", "data", "date", "dawn", "days", "dead", "deal",
    "dear", "debt", "deep", "deer", "desk", "dial", "dice", "diet", "dirt", "dish", "dive",
    "dock", "does", "done", "door", "dose", "down", "draw", "drew", "drop", "drum", "dual",
    "duke", "dust", "duty", "each", "earn", "ease", "east", "easy", "echo", "edge", "else",
    "even", "ever", "evil", "exit", "face", "fact", "fade", "fail", "fair", "fall", "fame",
    "farm", "fast", "fate", "fear", "feed", "feel", "feet", "fell", "felt", "file", "fill",
    "film", "find", "fine", "fire", "firm", "fish", "fist", "five", "flag", "flat", "flew",
    "flow", "fold", "folk", "food", "foot", "ford", "form", "fort", "four", "free", "from",
    "fuel", "full", "fund", "gain", "game", "gate", "gave", "gear", "gift", "girl", "give",
    "glad", "goal", "goat", "goes", "gold", "golf", "gone", "good", "gray", "grew", "grey",
    "grid", "grow", "gulf", "hair", "half", "hall", "hand", "hang", "hard", "harm", "hate",
    "have", "head", "hear", "heat", "heel", "held", "hell", "help", "herb", "herd", "here",
    "hero", "hide", "high", "hill", "hint", "hire", "hold", "hole", "holy", "home", "hope",
    "horn", "hose", "host", "hour", "huge", "hung", "hunt", "hurt", "icon", "idea", "inch",
    "into", "iron", "item", "jack", "jail", "join", "joke", "jump", "jury", "just", "keen",
    "keep", "kept", "kick", "kind", "king", "kiss", "knee", "knew", "knot", "know", "lace",
    "lack", "lady", "laid", "lake", "lamb", "lamp", "land", "lane", "last", "late", "lawn",
    "lead", "leaf", "lean", "left", "lend", "lens", "less", "life", "lift", "like", "limb",
    "lime", "line", "link", "lion", "list", "live", "load", "loan", "lock", "logo", "long",
    "look", "lord", "lose", "loss", "lost", "loud", "love", "luck", "lung", "made", "mail",
    "main", "make", "male", "many", "mark", "mask", "mass", "mate", "maze", "meal", "mean",
    "meat", "meet", "melt", "menu", "mere", "mild", "mile", "milk", "mill", "mind", "mine",
    "miss", "mist", "mode", "mood", "moon", "more", "most", "move", "much", "must", "myth",
    "nail", "name", "navy", "near", "neat", "neck", "need", "nest", "news", "next", "nice",
    "nine", "none", "noon", "nose", "note", "noun", "oath", "obey", "once", "only", "onto",
    "open", "oral", "oven", "over", "pace", "pack", "page", "paid", "pain", "pair", "pale",
    "palm", "park", "part", "pass", "past", "path", "peak", "pear", "peel", "peer", "pile",
    "pine", "pink", "pipe", "plan", "play", "plot", "plow", "plug", "plus", "poem", "poet",
    "pole", "poll", "pond", "pool", "poor", "pork", "port", "pose", "post", "pour", "pray",
    "prey", "pull", "pump", "pure", "push", "quit", "race", "rack", "rage", "raid", "rail",
    "rain", "rank", "rare", "rate", "read", "real", "rear", "rent", "rest", "rice", "rich",
    "ride", "ring", "rise", "risk", "road", "roar", "rock", "role", "roll", "roof", "room",
    "root", "rope", "rose", "rule", "rush", "rust", "safe", "said", "sail", "sake", "sale",
    "salt", "same", "sand", "save", "scan", "seal", "seat", "seed", "seek", "seem", "seen",
    "self", "sell", "send", "sent", "ship", "shoe", "shop", "shot", "show", "shut", "sick",
    "side", "sign", "silk", "sing", "sink", "site", "size", "skin", "slip", "slow", "snow",
    "soap", "sock", "soft", "soil", "sold", "sole", "some", "song", "soon", "sort", "soul",
    "soup", "spin", "spot", "star", "stay", "stem", "step", "stir", "stop", "such", "suit",
    "sure", "swim", "tail", "take", "tale", "talk", "tall", "tank", "tape", "task", "team",
    "tear", "tell", "tend", "tent", "term", "test", "text", "than", "that", "them", "then",
    "they", "thin", "this", "thus", "tide", "tile", "till", "time", "tiny", "tire", "told",
    "toll", "tone", "took", "tool", "torn", "tour", "town", "trap", "tray", "tree", "trim",
    "trip", "true", "tube", "tune", "turn", "twin", "type", "unit", "upon", "used", "user",
    "vain", "vast", "very", "view", "vote", "wage", "wait", "wake", "walk", "wall", "want",
    "ward", "warm", "warn", "wash", "wave", "weak", "wear", "week", "well", "went", "were",
    "west", "what", "when", "whom", "wide", "wife", "wild", "will", "wind", "wine", "wing",
    "wipe", "wire", "wise", "wish", "with", "wolf", "wood", "wool", "word", "wore", "work",
    "worm", "worn", "wrap", "yard", "yarn", "year", "yell", "your", "zero", "zone",
    // five and up
    "about", "above", "actor", "adapt", "admit", "after", "again", "agent", "agree", "ahead",
    "alarm", "album", "alert", "alike", "alive", "allow", "alone", "along", "among", "anger",
    "angle", "angry", "apart", "apple", "apply", "arena", "argue", "arise", "armor", "aside",
    "asset", "avoid", "awake", "award", "aware", "badge", "basic", "beach", "began", "begin",
    "being", "below", "bench", "birth", "black", "blade", "blame", "blank", "blast", "blend",
    "bless", "blind", "block", "blood", "board", "bonus", "boost", "bound", "brain", "brand",
    "brave", "bread", "break", "breed", "brick", "bride", "brief", "bring", "broad", "brown",
    "brush", "build", "built", "bunch", "burst", "cabin", "cable", "candy", "cargo", "carry",
    "catch", "cause", "chain", "chair", "chalk", "charm", "chart", "chase", "cheap", "check",
    "chess", "chest", "chief", "child", "choir", "chose", "civil", "claim", "class", "clean",
    "clear", "climb", "clock", "close", "cloth", "cloud", "coach", "coast", "color", "could",
    "count", "court", "cover", "craft", "crane", "crash", "cream", "crime", "cross", "crowd",
    "crown", "curve", "cycle", "daily", "dance", "death", "delay", "dense", "depth", "dirty",
    "doubt", "dozen", "draft", "drain", "drama", "dream", "dress", "drift", "drink", "drive",
    "eager", "eagle", "early", "earth", "eight", "elbow", "elect", "empty", "enemy", "enjoy",
    "enter", "entry", "equal", "error", "event", "every", "exact", "exist", "extra", "faith",
    "false", "fancy", "fault", "favor", "fence", "fever", "field", "fifth", "fight", "final",
    "first", "flame", "flash", "fleet", "float", "flood", "floor", "flour", "focus", "force",
    "forge", "forth", "found", "frame", "fresh", "front", "frost", "fruit", "gauge", "ghost",
    "giant", "given", "glass", "globe", "glory", "glove", "grace", "grade", "grain", "grand",
    "grant", "grape", "grasp", "grass", "grave", "great", "green", "greet", "grief", "gross",
    "group", "grove", "guard", "guess", "guest", "guide", "habit", "happy", "harsh", "haste",
    "heart", "heavy", "hedge", "hello", "hence", "hinge", "hobby", "honey", "honor", "horse",
    "hotel", "house", "human", "humor", "ideal", "image", "imply", "index", "inner", "input",
    "issue", "ivory", "jelly", "jewel", "joint", "judge", "juice", "knife", "knock", "known",
    "label", "labor", "large", "laser", "later", "laugh", "layer", "learn", "lease", "least",
    "leave", "legal", "lemon", "level", "light", "limit", "linen", "liver", "local", "lodge",
    "logic", "loose", "lower", "loyal", "lucky", "lunch", "magic", "major", "maker", "maple",
    "march", "match", "maybe", "mayor", "medal", "media", "mercy", "merge", "merit", "metal",
    "meter", "might", "minor", "model", "money", "month", "moral", "motor", "mount", "mouse",
    "mouth", "movie", "music", "naive", "nerve", "never", "night", "noble", "noise", "north",
    "noted", "novel", "nurse", "occur", "ocean", "offer", "often", "olive", "onion", "orbit",
    "order", "organ", "other", "ought", "outer", "owner", "paint", "panel", "panic", "paper",
    "party", "patch", "pause", "peace", "pearl", "phase", "phone", "photo", "piano", "piece",
    "pilot", "pitch", "place", "plain", "plane", "plant", "plate", "point", "pound", "power",
    "press", "price", "pride", "prime", "print", "prior", "prize", "proof", "proud", "prove",
    "pulse", "pupil", "queen", "quest", "queue", "quick", "quiet", "quite", "quote", "radio",
    "raise", "range", "rapid", "ratio", "reach", "react", "ready", "realm", "rebel", "refer",
    "reign", "relax", "reply", "rider", "ridge", "rifle", "right", "rigid", "risky", "rival",
    "river", "robin", "robot", "rocky", "rough", "round", "route", "royal", "rural", "salad",
    "scale", "scene", "scope", "score", "sense", "serve", "seven", "shade", "shake", "shall",
    "shape", "share", "sharp", "sheep", "sheet", "shelf", "shell", "shift", "shine", "shirt",
    "shock", "shoot", "shore", "short", "shout", "sight", "since", "sixth", "skill", "skirt",
    "sleep", "slice", "slide", "slope", "small", "smart", "smell", "smile", "smoke", "snake",
    "solar", "solid", "solve", "sorry", "sound", "south", "space", "spare", "speak", "speed",
    "spell", "spend", "spice", "spike", "spine", "spite", "split", "spoke", "sport", "staff",
    "stage", "stair", "stake", "stamp", "stand", "stare", "start", "state", "steam", "steel",
    "steep", "steer", "stick", "stiff", "still", "stock", "stone", "stood", "store", "storm",
    "story", "stove", "strap", "straw", "strip", "stuck", "study", "stuff", "style", "sugar",
    "suite", "sunny", "super", "swear", "sweat", "sweep", "sweet", "swift", "swing", "sword",
    "table", "taste", "teach", "tease", "teeth", "tempo", "tense", "tenth", "thank", "theft",
    "their", "theme", "there", "these", "thick", "thief", "thing", "think", "third", "those",
    "three", "threw", "throw", "thumb", "tiger", "tight", "timer", "title", "toast", "today",
    "token", "tooth", "topic", "torch", "total", "touch", "tough", "tower", "trace", "track",
    "trade", "trail", "train", "trait", "treat", "trend", "trial", "tribe", "trick", "troop",
    "truck", "truly", "trunk", "trust", "truth", "twice", "uncle", "under", "union", "unite",
    "unity", "until", "upper", "upset", "urban", "usage", "usual", "valid", "value", "vapor",
    "verse", "video", "virus", "visit", "vital", "vivid", "vocal", "voice", "voter", "wagon",
    "waste", "watch", "water", "weary", "weigh", "weird", "whale", "wheat", "wheel", "where",
    "which", "while", "white", "whole", "whose", "widow", "width", "woman", "world", "worry",
    "worse", "worst", "worth", "would", "wound", "wrist", "write", "wrong", "wrote", "yield",
    "young", "youth",
];

static COMMON_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

pub(crate) fn common_words() -> &'static HashSet<&'static str> {
    COMMON_SET.get_or_init(|| COMMON_WORDS.iter().copied().collect())
}
