//! Feature list shown on the homepage

use crate::display_types::{FeatureEntry, FeatureImage};

/// Homepage features, in display order
pub static FEATURE_LIST: &[FeatureEntry] = &[
    FeatureEntry {
        title: "React",
        image: FeatureImage::React,
        description: "React là thư viện <code> JavaScript </code> phổ biến nhất để xây dựng \
            giao diện người dùng (UI). Nó cho tốc độ phản hồi tuyệt vời khi user \
            nhập liệu bằng cách sử dụng phương pháp mới để render trang web.",
    },
    FeatureEntry {
        title: "JavaScript frameworks",
        image: FeatureImage::JavascriptFrameworks,
        description: "Thực chất đó là các đoạn code được viết sẵn bằng ngôn ngữ lập trình \
            JavaScript, tạo nên một bộ khung có sẵn. Nó chứa các trình biên dịch, \
            diễn dịch, các thư viện,… Những dòng code được viết sẵn trong framework \
            có thể được sử dụng cho các tính năng hoặc các tác vụ lập trình thông \
            thường.",
    },
    FeatureEntry {
        title: "HTML/CSS/JAVASCRIPT",
        image: FeatureImage::StaticAssets,
        description: "HTML (Hypertext Markup Language) là ngôn ngữ đánh dấu để tạo cấu trúc \
            trang web. CSS (Cascading Style Sheets) định dạng và trang trí trang. \
            JavaScript là ngôn ngữ tương tác làm cho trang web trở nên động đáo và \
            linh hoạt. Cùng nhau, chúng tạo nên trải nghiệm web đa dạng và hấp dẫn.",
    },
];
