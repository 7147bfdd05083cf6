/// Skeleton written to `index.html` in every new project root.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="cmn">
<head>
    <meta charset="UTF-8">
    <title>Title</title>
    <link rel="stylesheet" href="css/style.css" type="text/css">
</head>
<body>
    
</body>
</html>"#;

/// Starter stylesheet. Intentionally empty.
pub const STYLESHEET: &str = "";

/// Starter script: an immediately-invoked empty function.
pub const SCRIPT: &str = "(function(){\n    \n})();";

pub const INDEX_FILE_NAME: &str = "index.html";
