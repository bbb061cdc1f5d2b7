//! Embedded review form page. Pure display markup plus the fetch call; all
//! validation and prompt logic lives on the server.
//!
//! Comp lines are `address, price, sqft, grade, yearSold` (missing trailing
//! fields allowed); rental comp lines are sent as free text.

pub(crate) const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>AI Real Estate Review</title>
  <style>
    body { font-family: sans-serif; padding: 20px; background: #f4f7fa; }
    .container { max-width: 640px; margin: auto; background: white; padding: 30px; box-shadow: 0 0 10px #ccc; }
    input, textarea, button { padding: 12px; width: 100%; margin-top: 10px; font-size: 16px; box-sizing: border-box; }
    textarea { height: 72px; }
    label { display: block; margin-top: 14px; font-size: 14px; color: #445; }
    .output { margin-top: 20px; background: #eef; padding: 15px; white-space: pre-wrap; }
    .error { background: #fee; }
  </style>
</head>
<body>
  <div class="container">
    <h2>Real Estate AI Review</h2>
    <input id="addressInput" placeholder="Enter property address" />
    <label>Total square footage (optional)</label>
    <input id="sqftInput" placeholder="e.g. 1500" />
    <label>Condition grade (optional)</label>
    <input id="gradeInput" placeholder="A, B, C, D or F" />
    <label>Interest rate (optional)</label>
    <input id="rateInput" placeholder="e.g. 6.5" />
    <label>Comparable sales, one per line: address, price, sqft, grade, yearSold (optional)</label>
    <textarea id="compsInput" placeholder="789 Pine Rd, 450000, 1800, B, 2023"></textarea>
    <label>Rental comps, one per line (optional)</label>
    <textarea id="rentCompsInput" placeholder="2bd near school, $1900/mo"></textarea>
    <button onclick="getReview()">Get AI Review</button>
    <div id="aiOutput" class="output"></div>
  </div>
  <script>
    function lines(id) {
      return document.getElementById(id).value
        .split("\n").map(function (l) { return l.trim(); })
        .filter(function (l) { return l.length > 0; });
    }
    function parseComp(line) {
      var parts = line.split(",").map(function (p) { return p.trim(); });
      var keys = ["address", "price", "sqft", "grade", "yearSold"];
      var comp = {};
      keys.forEach(function (k, i) { if (parts[i]) comp[k] = parts[i]; });
      return comp;
    }
    async function getReview() {
      var out = document.getElementById("aiOutput");
      out.className = "output";
      out.innerText = "Loading...";
      var body = {
        address: document.getElementById("addressInput").value,
        sqft: document.getElementById("sqftInput").value,
        grade: document.getElementById("gradeInput").value,
        interestRate: document.getElementById("rateInput").value,
        comps: lines("compsInput").map(parseComp),
        rentComps: lines("rentCompsInput")
      };
      try {
        var response = await fetch("/review", {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify(body)
        });
        var data = await response.json();
        if (data.review) {
          out.innerText = data.review;
        } else {
          out.className = "output error";
          out.innerText = data.error || "Error.";
        }
      } catch (e) {
        out.className = "output error";
        out.innerText = "Request failed: " + e;
      }
    }
  </script>
</body>
</html>
"#;
